//! Naming rules for interface types and packages.

/// Convert a camel case interface type name to lower case with underscores
/// (e.g., "NavSatFix" -> "nav_sat_fix").
///
/// An underscore is inserted before an uppercase letter when it starts a new
/// capitalized word ("HTTPRequest" -> "http_request") or when it follows a
/// lowercase letter or digit ("GoalID" -> "goal_id"). Runs of capitals stay
/// together ("IMU" -> "imu") and digits never start a word
/// ("Point32" -> "point32").
pub fn camel_to_underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let starts_word = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let after_lower = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            if starts_word || after_lower {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Check whether a name is usable as a package name.
///
/// Package names start with a lowercase ASCII letter and contain only
/// lowercase ASCII letters, digits and underscores.
pub fn is_valid_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_underscore_table() {
        let table = [
            ("ActionFeedback", "action_feedback"),
            ("IMU", "imu"),
            ("Point32", "point32"),
            ("NavSatFix", "nav_sat_fix"),
            ("HTTPRequest", "http_request"),
            ("GoalID", "goal_id"),
            ("Int32MultiArray", "int32_multi_array"),
            ("String", "string"),
            ("TF2Error", "tf2_error"),
            ("", ""),
        ];

        for (input, expected) in table {
            assert_eq!(camel_to_underscore(input), expected, "input: {input}");
        }
    }

    #[test]
    fn test_camel_to_underscore_is_stable() {
        for name in ["MultiDOFJointState", "UInt8", "Empty"] {
            assert_eq!(camel_to_underscore(name), camel_to_underscore(name));
        }
        assert_eq!(camel_to_underscore("MultiDOFJointState"), "multi_dof_joint_state");
        assert_eq!(camel_to_underscore("UInt8"), "u_int8");
    }

    #[test]
    fn test_is_valid_package_name() {
        assert!(is_valid_package_name("std_msgs"));
        assert!(is_valid_package_name("tf2_msgs"));
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("2d_msgs"));
        assert!(!is_valid_package_name("StdMsgs"));
        assert!(!is_valid_package_name("std-msgs"));
    }
}
