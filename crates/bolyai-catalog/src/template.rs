use crate::task::Period;

/// Expand `{yy}`, `{nn}`, `{gg}` and `{g}` in a document template.
///
/// `{gg}` and `{g}` are left untouched when no grade is given, which only
/// happens for per-year documents whose templates never mention a grade.
pub fn render(template: &str, period: Period, grade: Option<u8>) -> String {
    let mut out = template
        .replace("{yy}", &format!("{:02}", period.start()))
        .replace("{nn}", &format!("{:02}", period.end()));

    if let Some(grade) = grade {
        out = out
            .replace("{gg}", &format!("{grade:02}"))
            .replace("{g}", &grade.to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_years_and_grade() {
        let rendered = render(
            "feladatok/20{yy}-{nn}/20{yy}{nn}_matek_{gg}.pdf",
            Period::new(5),
            Some(3),
        );
        assert_eq!(rendered, "feladatok/2005-06/200506_matek_03.pdf");
    }

    #[test]
    fn bare_grade_is_not_padded() {
        assert_eq!(render("20{yy}-{nn}_{g}.pdf", Period::new(9), Some(4)), "2009-10_4.pdf");
        assert_eq!(
            render("20{yy}-{nn}_donto_{g}.pdf", Period::new(21), Some(12)),
            "2021-22_donto_12.pdf"
        );
    }

    #[test]
    fn per_year_template_ignores_grade() {
        assert_eq!(
            render("20{yy}{nn}_matek_megoldokulcs.pdf", Period::new(24), None),
            "202425_matek_megoldokulcs.pdf"
        );
    }
}
