use super::finding::IngredientFinding;

/// Returned instead of markup when the model reports nothing
pub const NO_FINDINGS: &str = "No flagged ingredient found.";

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_card(finding: &IngredientFinding) -> String {
    let color = finding.color_code.css_color();
    format!(
        r#"
    <div class="card mb-3" style="border-left: 5px solid {color};">
        <div class="card-body">
            <h5 class="ingredient" style="color: {color};" onclick="toggleDetails(this)">
                <i class="fas {icon}"></i>
                {name}
            </h5>
            <div class="details" style="display: none;">{explanation}</div>
        </div>
    </div>
"#,
        color = color,
        icon = finding.color_code.icon(),
        name = html_escape(&finding.name),
        explanation = finding.color_code.explanation().unwrap_or_default(),
    )
}

/// One card per finding, in the order given
pub fn render_findings(findings: &[IngredientFinding]) -> String {
    if findings.is_empty() {
        return NO_FINDINGS.to_string();
    }

    findings.iter().map(render_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::finding::ColorCode;

    fn finding(name: &str, code: &str) -> IngredientFinding {
        IngredientFinding {
            name: name.to_string(),
            is_harmful: None,
            can_cause: None,
            category: None,
            color_code: ColorCode::from(code.to_string()),
        }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_findings(&[]), NO_FINDINGS);
    }

    #[test]
    fn cards_follow_input_order() {
        let html = render_findings(&[
            finding("palm oil", "red"),
            finding("lecithin", "purple"),
            finding("water", "white"),
        ]);

        assert_eq!(html.matches(r#"<div class="card mb-3""#).count(), 3);
        let palm = html.find("palm oil").unwrap();
        let lecithin = html.find("lecithin").unwrap();
        let water = html.find("water").unwrap();
        assert!(palm < lecithin && lecithin < water);
    }

    #[test]
    fn card_uses_color_icon_and_explanation() {
        let html = render_findings(&[finding("sugar", "yellow")]);
        assert!(html.contains("border-left: 5px solid yellow;"));
        assert!(html.contains(r#"style="color: yellow;""#));
        assert!(html.contains("fa-exclamation-circle"));
        assert!(html.contains("This ingredient is moderate;"));
    }

    #[test]
    fn white_card_gets_check_icon() {
        let html = render_findings(&[finding("water", "white")]);
        assert!(html.contains("fa-check-circle"));
        assert!(html.contains("considered non-harmful"));
    }

    #[test]
    fn unknown_code_renders_black_without_explanation() {
        let html = render_findings(&[finding("mystery", "green")]);
        assert!(html.contains("border-left: 5px solid black;"));
        assert!(html.contains(r#"<div class="details" style="display: none;"></div>"#));
    }

    #[test]
    fn name_is_escaped() {
        let html = render_findings(&[finding("<script>alert(1)</script>", "red")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
