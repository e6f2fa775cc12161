//! Tera function bindings
//!
//! Exposes the [`CommitteeHelper`] queries to templates under stable names:
//!
//! ```text
//! {% if is_host(committee=committee) %}...{% endif %}
//! {% if is_promotable_host(adherent=adherent, committee=committee) %}...{% endif %}
//! <a href="{{ committee_path(name='app_committee_show', committee=committee) }}">
//! ```
//!
//! Each name binds to exactly one helper method. Permission and eligibility
//! functions return booleans; the link functions return strings and turn any
//! resolver error into a template error so a bad link fails the render
//! instead of emitting a broken page.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tera::{Function, Tera, Value};
use tracing::debug;

use super::helper::CommitteeHelper;
use crate::committee::{Adherent, Committee, RouteParams};

/// Permission queries exposed to templates, by function name
const PERMISSION_FUNCTIONS: [(&str, fn(&CommitteeHelper, &Committee) -> bool); 6] = [
    ("is_host", CommitteeHelper::is_host),
    ("is_supervisor", CommitteeHelper::is_supervisor),
    ("can_follow", CommitteeHelper::can_follow),
    ("can_unfollow", CommitteeHelper::can_unfollow),
    ("can_create", CommitteeHelper::can_create),
    ("can_see", CommitteeHelper::can_see),
];

/// Eligibility queries exposed to templates, by function name
const ELIGIBILITY_FUNCTIONS: [(&str, fn(&CommitteeHelper, &Adherent, &Committee) -> bool); 2] = [
    ("is_promotable_host", CommitteeHelper::is_promotable_host),
    ("is_demotable_host", CommitteeHelper::is_demotable_host),
];

/// Register every committee function on a Tera engine
///
/// The helper is shared across all registered functions, so one engine
/// answers every committee question through the same collaborators.
pub fn register_committee_functions(tera: &mut Tera, helper: Arc<CommitteeHelper>) {
    for (name, query) in PERMISSION_FUNCTIONS {
        tera.register_function(
            name,
            PermissionFn {
                helper: helper.clone(),
                name,
                query,
            },
        );
    }

    for (name, query) in ELIGIBILITY_FUNCTIONS {
        tera.register_function(
            name,
            EligibilityFn {
                helper: helper.clone(),
                name,
                query,
            },
        );
    }

    tera.register_function(
        "committee_path",
        RouteFn {
            helper: helper.clone(),
            name: "committee_path",
            absolute: false,
        },
    );
    tera.register_function(
        "committee_url",
        RouteFn {
            helper,
            name: "committee_url",
            absolute: true,
        },
    );

    debug!(
        functions = PERMISSION_FUNCTIONS.len() + ELIGIBILITY_FUNCTIONS.len() + 2,
        "Committee template functions registered"
    );
}

/// Binds one permission query to a template function name
struct PermissionFn {
    helper: Arc<CommitteeHelper>,
    name: &'static str,
    query: fn(&CommitteeHelper, &Committee) -> bool,
}

impl Function for PermissionFn {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let committee: Committee = entity_arg(args, "committee", self.name)?;
        Ok(Value::Bool((self.query)(&self.helper, &committee)))
    }
}

/// Binds one role transition query to a template function name
struct EligibilityFn {
    helper: Arc<CommitteeHelper>,
    name: &'static str,
    query: fn(&CommitteeHelper, &Adherent, &Committee) -> bool,
}

impl Function for EligibilityFn {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let adherent: Adherent = entity_arg(args, "adherent", self.name)?;
        let committee: Committee = entity_arg(args, "committee", self.name)?;
        Ok(Value::Bool((self.query)(&self.helper, &adherent, &committee)))
    }
}

/// Binds `committee_path` or `committee_url` to the link resolver
///
/// Every keyword argument beyond `name` and `committee` is forwarded to the
/// resolver as a route parameter, so templates can write
/// `committee_path(name='app_committee_events', committee=committee, page=2)`.
struct RouteFn {
    helper: Arc<CommitteeHelper>,
    name: &'static str,
    absolute: bool,
}

impl Function for RouteFn {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let route = string_arg(args, "name", self.name)?;
        let committee: Committee = entity_arg(args, "committee", self.name)?;
        let params: RouteParams = args
            .iter()
            .filter(|(key, _)| key.as_str() != "name" && key.as_str() != "committee")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let link = if self.absolute {
            self.helper.url(&route, &committee, &params)
        } else {
            self.helper.path(&route, &committee, &params)
        };

        link.map(Value::String).map_err(tera::Error::msg)
    }
}

/// Deserialize a required keyword argument into a domain type
fn entity_arg<T: DeserializeOwned>(
    args: &HashMap<String, Value>,
    name: &str,
    function: &str,
) -> tera::Result<T> {
    let value = args.get(name).ok_or_else(|| {
        tera::Error::msg(format!(
            "Missing `{}` argument for function `{}`",
            name, function
        ))
    })?;

    serde_json::from_value(value.clone()).map_err(|e| {
        tera::Error::msg(format!(
            "Invalid `{}` argument for function `{}`: {}",
            name, function, e
        ))
    })
}

/// Extract a required string keyword argument
fn string_arg(args: &HashMap<String, Value>, name: &str, function: &str) -> tera::Result<String> {
    match args.get(name) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(tera::Error::msg(format!(
            "Function `{}` received {}={} but `{}` can only be a string",
            function, name, other, name
        ))),
        None => Err(tera::Error::msg(format!(
            "Missing `{}` argument for function `{}`",
            name, function
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::committee::{
        AuthorizationChecker, CommitteePermission, CommitteeUrlResolver, RouteError,
    };

    struct GrantAll;

    impl AuthorizationChecker for GrantAll {
        fn is_granted(&self, _permission: CommitteePermission, _committee: &Committee) -> bool {
            true
        }
    }

    struct DenyAll;

    impl AuthorizationChecker for DenyAll {
        fn is_granted(&self, _permission: CommitteePermission, _committee: &Committee) -> bool {
            false
        }
    }

    struct StaticResolver;

    impl CommitteeUrlResolver for StaticResolver {
        fn path(
            &self,
            _route: &str,
            committee: &Committee,
            _params: &RouteParams,
        ) -> Result<String, RouteError> {
            Ok(format!("/comites/{}", committee.slug))
        }

        fn url(
            &self,
            _route: &str,
            committee: &Committee,
            _params: &RouteParams,
        ) -> Result<String, RouteError> {
            Ok(format!("https://en-marche.test/comites/{}", committee.slug))
        }
    }

    struct FailingResolver;

    impl CommitteeUrlResolver for FailingResolver {
        fn path(
            &self,
            route: &str,
            _committee: &Committee,
            _params: &RouteParams,
        ) -> Result<String, RouteError> {
            Err(RouteError::UnknownRoute(route.to_string()))
        }

        fn url(
            &self,
            route: &str,
            _committee: &Committee,
            _params: &RouteParams,
        ) -> Result<String, RouteError> {
            Err(RouteError::UnknownRoute(route.to_string()))
        }
    }

    struct RecordingResolver {
        params_seen: Mutex<Vec<RouteParams>>,
    }

    impl RecordingResolver {
        fn new() -> Self {
            Self {
                params_seen: Mutex::new(Vec::new()),
            }
        }

        fn params_seen(&self) -> Vec<RouteParams> {
            self.params_seen.lock().unwrap().clone()
        }
    }

    impl CommitteeUrlResolver for RecordingResolver {
        fn path(
            &self,
            _route: &str,
            _committee: &Committee,
            params: &RouteParams,
        ) -> Result<String, RouteError> {
            self.params_seen.lock().unwrap().push(params.clone());
            Ok("/recorded".to_string())
        }

        fn url(
            &self,
            _route: &str,
            _committee: &Committee,
            params: &RouteParams,
        ) -> Result<String, RouteError> {
            self.params_seen.lock().unwrap().push(params.clone());
            Ok("https://en-marche.test/recorded".to_string())
        }
    }

    fn make_helper(checker: Arc<dyn AuthorizationChecker>) -> Arc<CommitteeHelper> {
        Arc::new(CommitteeHelper::new(checker, Arc::new(StaticResolver)))
    }

    fn committee_args() -> HashMap<String, Value> {
        let committee = Committee::new("Comité de Lyon", "comite-de-lyon");
        let mut args = HashMap::new();
        args.insert(
            "committee".to_string(),
            serde_json::to_value(&committee).unwrap(),
        );
        args
    }

    #[test]
    fn test_permission_fn_returns_engine_verdict() {
        let granted = PermissionFn {
            helper: make_helper(Arc::new(GrantAll)),
            name: "is_host",
            query: CommitteeHelper::is_host,
        };
        assert_eq!(granted.call(&committee_args()).unwrap(), Value::Bool(true));

        let denied = PermissionFn {
            helper: make_helper(Arc::new(DenyAll)),
            name: "is_host",
            query: CommitteeHelper::is_host,
        };
        assert_eq!(denied.call(&committee_args()).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_permission_fn_requires_committee() {
        let function = PermissionFn {
            helper: make_helper(Arc::new(GrantAll)),
            name: "can_follow",
            query: CommitteeHelper::can_follow,
        };

        let err = function.call(&HashMap::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing `committee` argument for function `can_follow`"
        );
    }

    #[test]
    fn test_permission_fn_rejects_malformed_committee() {
        let function = PermissionFn {
            helper: make_helper(Arc::new(GrantAll)),
            name: "is_host",
            query: CommitteeHelper::is_host,
        };

        let mut args = HashMap::new();
        args.insert("committee".to_string(), Value::Number(42.into()));

        let err = function.call(&args).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid `committee` argument for function `is_host`"));
    }

    #[test]
    fn test_eligibility_fn_requires_adherent() {
        let function = EligibilityFn {
            helper: make_helper(Arc::new(DenyAll)),
            name: "is_promotable_host",
            query: CommitteeHelper::is_promotable_host,
        };

        let err = function.call(&committee_args()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing `adherent` argument for function `is_promotable_host`"
        );
    }

    #[test]
    fn test_route_fn_requires_name() {
        let function = RouteFn {
            helper: make_helper(Arc::new(DenyAll)),
            name: "committee_path",
            absolute: false,
        };

        let err = function.call(&committee_args()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing `name` argument for function `committee_path`"
        );
    }

    #[test]
    fn test_route_fn_rejects_non_string_name() {
        let function = RouteFn {
            helper: make_helper(Arc::new(DenyAll)),
            name: "committee_path",
            absolute: false,
        };

        let mut args = committee_args();
        args.insert("name".to_string(), Value::Number(7.into()));

        let err = function.call(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Function `committee_path` received name=7 but `name` can only be a string"
        );
    }

    #[test]
    fn test_route_fn_passes_residual_kwargs() {
        let resolver = Arc::new(RecordingResolver::new());
        let helper = Arc::new(CommitteeHelper::new(Arc::new(DenyAll), resolver.clone()));
        let function = RouteFn {
            helper,
            name: "committee_path",
            absolute: false,
        };

        let mut args = committee_args();
        args.insert(
            "name".to_string(),
            Value::String("app_committee_events".to_string()),
        );
        args.insert("page".to_string(), Value::Number(2.into()));
        args.insert("tab".to_string(), Value::String("members".to_string()));

        function.call(&args).unwrap();

        let seen = resolver.params_seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0].get("page"), Some(&Value::Number(2.into())));
        assert_eq!(
            seen[0].get("tab"),
            Some(&Value::String("members".to_string()))
        );
    }

    #[test]
    fn test_route_fn_defaults_to_empty_params() {
        let resolver = Arc::new(RecordingResolver::new());
        let helper = Arc::new(CommitteeHelper::new(Arc::new(DenyAll), resolver.clone()));
        let function = RouteFn {
            helper,
            name: "committee_path",
            absolute: false,
        };

        let mut args = committee_args();
        args.insert(
            "name".to_string(),
            Value::String("app_committee_show".to_string()),
        );

        function.call(&args).unwrap();

        let seen = resolver.params_seen();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_empty());
    }

    #[test]
    fn test_route_fn_absolute_flag_selects_url() {
        let mut args = committee_args();
        args.insert(
            "name".to_string(),
            Value::String("app_committee_show".to_string()),
        );

        let path_fn = RouteFn {
            helper: make_helper(Arc::new(DenyAll)),
            name: "committee_path",
            absolute: false,
        };
        assert_eq!(
            path_fn.call(&args).unwrap(),
            Value::String("/comites/comite-de-lyon".to_string())
        );

        let url_fn = RouteFn {
            helper: make_helper(Arc::new(DenyAll)),
            name: "committee_url",
            absolute: true,
        };
        assert_eq!(
            url_fn.call(&args).unwrap(),
            Value::String("https://en-marche.test/comites/comite-de-lyon".to_string())
        );
    }

    #[test]
    fn test_route_fn_resolver_error_becomes_template_error() {
        let helper = Arc::new(CommitteeHelper::new(
            Arc::new(DenyAll),
            Arc::new(FailingResolver),
        ));
        let function = RouteFn {
            helper,
            name: "committee_path",
            absolute: false,
        };

        let mut args = committee_args();
        args.insert(
            "name".to_string(),
            Value::String("app_committee_nowhere".to_string()),
        );

        let err = function.call(&args).unwrap_err();
        assert_eq!(err.to_string(), "Unknown route: app_committee_nowhere");
    }
}
