//! Default naming conventions for component access contracts.
//!
//! Components that declare neither a local nor a remote contract name get
//! one derived from the component name: at most one trailing occurrence of
//! the literal `"Bean"` is stripped, then `"Local"` / `"Remote"` is
//! appended. This is the single place the convention lives; both the
//! reflection builder and the deployment-descriptor builder call into it.

/// Suffix appended to derive the local contract name.
pub const LOCAL_SUFFIX: &str = "Local";

/// Suffix appended to derive the remote contract name.
pub const REMOTE_SUFFIX: &str = "Remote";

/// Component-name suffix stripped (once) before appending a contract suffix.
const COMPONENT_SUFFIX: &str = "Bean";

/// Derive the default local contract name for a component name.
///
/// `"OrderBean"` yields `"OrderLocal"`, `"Order"` yields `"OrderLocal"`.
pub fn derive_local_name(component_name: &str) -> String {
    derive_contract_name(component_name, LOCAL_SUFFIX)
}

/// Derive the default remote contract name for a component name.
///
/// `"OrderBean"` yields `"OrderRemote"`, `"Order"` yields `"OrderRemote"`.
pub fn derive_remote_name(component_name: &str) -> String {
    derive_contract_name(component_name, REMOTE_SUFFIX)
}

/// Strip at most one trailing `"Bean"` and append the contract suffix.
fn derive_contract_name(component_name: &str, suffix: &str) -> String {
    let base = component_name
        .strip_suffix(COMPONENT_SUFFIX)
        .unwrap_or(component_name);
    format!("{base}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_bean_suffix() {
        assert_eq!(derive_local_name("OrderBean"), "OrderLocal");
        assert_eq!(derive_remote_name("OrderBean"), "OrderRemote");
    }

    #[test]
    fn test_appends_directly_without_bean_suffix() {
        assert_eq!(derive_local_name("Order"), "OrderLocal");
        assert_eq!(derive_remote_name("Order"), "OrderRemote");
    }

    #[test]
    fn test_strips_at_most_one_occurrence() {
        assert_eq!(derive_local_name("BeanBean"), "BeanLocal");
        assert_eq!(derive_remote_name("BeanBean"), "BeanRemote");
    }

    #[test]
    fn test_bean_only_name_collapses_to_suffix() {
        assert_eq!(derive_local_name("Bean"), "Local");
        assert_eq!(derive_remote_name("Bean"), "Remote");
    }

    #[test]
    fn test_interior_bean_is_untouched() {
        assert_eq!(derive_local_name("BeanCounter"), "BeanCounterLocal");
    }
}
