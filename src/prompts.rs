pub const BASIC: &str = include_str!("../data/prompts/basic.txt");
pub const HIGH_RES: &str = include_str!("../data/prompts/high_res.txt");
pub const GROUNDED: &str = include_str!("../data/prompts/grounded.txt");
pub const LOGO_INITIAL: &str = include_str!("../data/prompts/logo_initial.txt");
pub const LOGO_REFINE_COLORS: &str = include_str!("../data/prompts/logo_refine_colors.txt");
pub const LOGO_REFINE_TYPE: &str = include_str!("../data/prompts/logo_refine_type.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!BASIC.is_empty());
        assert!(!HIGH_RES.is_empty());
        assert!(!GROUNDED.is_empty());
        assert!(!LOGO_INITIAL.is_empty());
        assert!(!LOGO_REFINE_COLORS.is_empty());
        assert!(!LOGO_REFINE_TYPE.is_empty());
    }

    #[test]
    fn test_logo_initial_has_name_placeholder() {
        assert!(LOGO_INITIAL.contains("{{name}}"));
    }
}
