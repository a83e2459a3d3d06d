//! Text rendering for advice and market documents, one branch per document shape.

use std::fmt;

use crate::models::advice::CareerAdvice;
use crate::models::market::MarketAnalysisDocument;

pub struct AdviceView<'a>(pub &'a CareerAdvice);

impl fmt::Display for AdviceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            CareerAdvice::Current(advice) => {
                writeln!(f, "Top {} Career Recommendations", advice.career_paths.len())?;
                for (i, path) in advice.career_paths.iter().enumerate() {
                    writeln!(f)?;
                    if path.title.is_empty() {
                        writeln!(f, "{}. (untitled)", i + 1)?;
                    } else {
                        writeln!(f, "{}. {}", i + 1, path.title)?;
                    }
                    write_line(f, "   ", &path.description)?;
                    write_list(f, "Required skills", &path.required_skills)?;
                    write_list(f, "Next steps", &path.next_steps)?;
                    write_line(f, "   Outlook: ", &path.outlook)?;
                }
                if !advice.general_advice.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "General advice: {}", advice.general_advice)?;
                }
                Ok(())
            }
            CareerAdvice::Legacy(advice) => {
                writeln!(f, "Recommended Career: {}", advice.career_path)?;
                write_list(f, "Why it fits", &advice.reasons)?;
                write_line(f, "Suggested project: ", &advice.suggested_project)
            }
            CareerAdvice::Raw(raw) => {
                writeln!(f, "Career Advice")?;
                writeln!(f, "{}", raw.raw_advice)
            }
            CareerAdvice::Unknown(value) => {
                writeln!(f, "Career Advice Generated")?;
                write_json(f, value)
            }
        }
    }
}

pub struct MarketView<'a>(pub &'a MarketAnalysisDocument);

impl fmt::Display for MarketView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            MarketAnalysisDocument::Structured(analysis) => {
                writeln!(f, "Growth Potential in Vietnam")?;
                writeln!(f, "   {}", analysis.growth_potential)?;
                write_list(f, "Key required skills", &analysis.required_skills)?;
                if let Some(salary) = &analysis.salary_range {
                    writeln!(f, "   Average salary range:")?;
                    write_line(f, "     - Junior: ", &salary.junior)?;
                    write_line(f, "     - Mid-level (2-3 years): ", &salary.mid_level)?;
                    write_line(f, "     - Senior (4+ years): ", &salary.senior)?;
                    write_line(f, "     - Tech lead / architect: ", &salary.tech_lead)?;
                }
                write_list(f, "Top companies", &analysis.top_companies)
            }
            MarketAnalysisDocument::Unknown(value) => {
                writeln!(f, "Market Analysis Generated")?;
                write_json(f, value)
            }
        }
    }
}

pub fn render_advice(advice: &CareerAdvice) -> String {
    AdviceView(advice).to_string()
}

pub fn render_market(analysis: &MarketAnalysisDocument) -> String {
    MarketView(analysis).to_string()
}

/// Writes `prefix` and `text` on one line, or nothing when `text` is empty.
fn write_line(f: &mut fmt::Formatter<'_>, prefix: &str, text: &str) -> fmt::Result {
    if text.is_empty() {
        return Ok(());
    }
    writeln!(f, "{prefix}{text}")
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "   {heading}:")?;
    for item in items {
        writeln!(f, "     - {item}")?;
    }
    Ok(())
}

fn write_json(f: &mut fmt::Formatter<'_>, value: &serde_json::Value) -> fmt::Result {
    match value {
        serde_json::Value::String(text) => writeln!(f, "{text}"),
        other => {
            let pretty = serde_json::to_string_pretty(other).map_err(|_| fmt::Error)?;
            writeln!(f, "{pretty}")
        }
    }
}
