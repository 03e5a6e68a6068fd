//! HTML report output format.
//!
//! Generates a self-contained HTML page: one table section per module,
//! with the current-version cell colored by how far it lags behind.

use crate::domain::{DependencyRecord, DependencyReport, ReportSummary};
use crate::error::RenderError;
use crate::output::minify::{HtmlMinifier, Minifier};
use crate::output::{OutputConfig, OutputFormatter};
use chrono::{DateTime, Utc};
use std::io::Write;

const STYLE: &str = r#"
        .datagrid table { border-collapse: collapse; text-align: left; width: 100%; }
        .datagrid { font: normal 12px/150% Arial, Helvetica, sans-serif; background: #fff; overflow: hidden; border: 1px solid #36752D; border-radius: 3px; }
        .datagrid table td, .datagrid table th { padding: 3px 10px; }
        .datagrid table tr.module th { background: linear-gradient(to bottom, #36752D 5%, #275420 100%); background-color: #36752D; color: #FFFFFF; font-size: 15px; font-weight: bold; border-left: 1px solid #36752D; }
        .datagrid table tr.module th:first-child { border: none; }
        .datagrid table td { color: #275420; border-left: 1px solid #C6FFC2; font-size: 12px; font-weight: normal; }
        .datagrid table td:first-child { border-left: none; }
        .datagrid table td a { color: #275420; }
        .datagrid td.major-behind { background-color: red; }
        .datagrid td.minor-behind { background-color: yellow; }
        .datagrid td.patch-behind { background-color: powderblue; }
        .summary { font: normal 13px Arial, Helvetica, sans-serif; margin-bottom: 1em; }
        .empty { font: italic 13px Arial, Helvetica, sans-serif; padding: 1em; }
        footer { font: normal 11px Arial, Helvetica, sans-serif; color: #888; margin-top: 1em; }
"#;

/// HTML formatter for shareable reports
pub struct HtmlFormatter {
    /// Page title and heading
    title: String,
    /// Base URL for artifact links
    artifact_url: String,
    /// Minifier applied to the finished page, if any
    minifier: Option<Box<dyn Minifier>>,
    /// Generation time shown in the footer
    generated_at: Option<DateTime<Utc>>,
}

impl HtmlFormatter {
    /// Create a new HTML formatter from output settings
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            title: config.title.clone(),
            artifact_url: config.artifact_url.trim_end_matches('/').to_string(),
            minifier: config
                .minify
                .then(|| Box::new(HtmlMinifier::new()) as Box<dyn Minifier>),
            generated_at: config.generated_at,
        }
    }

    /// Replace the minifier used when minification is enabled
    pub fn with_minifier(mut self, minifier: Box<dyn Minifier>) -> Self {
        self.minifier = Some(minifier);
        self
    }

    /// Render the report as an unminified HTML page
    pub fn render(&self, report: &DependencyReport) -> String {
        let summary = ReportSummary::from_report(report);
        let title = html_escape(&self.title);
        let mut html = String::new();

        html.push_str(&format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>{}    </style>
</head>
<body>
    <h1>{}</h1>
    <h3>Dependencies that are not up-to-date:</h3>
"#,
            title, STYLE, title
        ));

        html.push_str(&format!(
            "    <div class=\"summary\">{} modules, {} dependencies: {} major, {} minor, {} patch, {} up-to-date</div>\n",
            summary.modules,
            summary.dependencies,
            summary.major,
            summary.minor,
            summary.patch,
            summary.up_to_date
        ));

        if report.is_empty() {
            html.push_str("    <div class=\"empty\">No dependency updates found</div>\n");
        } else {
            html.push_str("    <div class=\"datagrid\">\n        <table>\n");
            for module in &report.modules {
                let name = if module.is_unnamed() {
                    "(no module)".to_string()
                } else {
                    html_escape(&module.name)
                };
                html.push_str(&format!(
                    "            <tr class=\"module\">\n                <th>{}</th>\n                <th>Current</th>\n                <th>Latest</th>\n            </tr>\n",
                    name
                ));
                for record in &module.dependencies {
                    html.push_str(&self.render_row(record));
                }
            }
            html.push_str("        </table>\n    </div>\n");
        }

        if let Some(generated_at) = self.generated_at {
            html.push_str(&format!(
                "    <footer>Generated {}</footer>\n",
                generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_row(&self, record: &DependencyRecord) -> String {
        format!(
            "            <tr>\n                <td class=\"artifact\">{}</td>\n                <td class=\"current {}\">{}</td>\n                <td class=\"latest\">{}</td>\n            </tr>\n",
            self.artifact_cell(record),
            record.severity().as_str(),
            html_escape(&record.current_version),
            html_escape(&record.latest_version)
        )
    }

    fn artifact_cell(&self, record: &DependencyRecord) -> String {
        match record.coordinates() {
            Some((group, name)) => format!(
                "<a href=\"{}/{}/{}/{}\">{}</a>",
                html_escape(&self.artifact_url),
                html_escape(group),
                html_escape(name),
                html_escape(&record.current_version),
                html_escape(&record.artifact)
            ),
            None => html_escape(&record.artifact),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, report: &DependencyReport, writer: &mut dyn Write) -> Result<(), RenderError> {
        let html = self.render(report);

        let page = match &self.minifier {
            Some(minifier) => match minifier.minify(&html) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!(error = %e, "minification failed, writing unminified HTML");
                    html
                }
            },
            None => html,
        };

        writer.write_all(page.as_bytes())?;
        Ok(())
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinifyError;
    use chrono::TimeZone;

    struct BrokenMinifier;

    impl Minifier for BrokenMinifier {
        fn minify(&self, _markup: &str) -> Result<String, MinifyError> {
            let source = String::from_utf8(vec![0xc3, 0x28]).unwrap_err();
            Err(MinifyError::InvalidUtf8 { source })
        }
    }

    fn formatter(minify: bool) -> HtmlFormatter {
        let config = OutputConfig {
            minify,
            generated_at: None,
            ..OutputConfig::default()
        };
        HtmlFormatter::new(&config)
    }

    fn sample_report() -> DependencyReport {
        let mut report = DependencyReport::new();
        report.push("core", DependencyRecord::new("org.slf4j:slf4j-api", "1.7.36", "2.0.9"));
        report.push("core", DependencyRecord::new("junit:junit", "4.13.1", "4.13.2"));
        report.push("web", DependencyRecord::new("com.foo:bar", "1.0.0", "1.1.0"));
        report
    }

    fn render_to_string(formatter: &HtmlFormatter, report: &DependencyReport) -> String {
        let mut buf = Vec::new();
        formatter.format(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_module_sections_in_order() {
        let html = formatter(false).render(&sample_report());
        let core = html.find("<th>core</th>").unwrap();
        let web = html.find("<th>web</th>").unwrap();
        assert!(core < web);
        assert_eq!(html.matches("<th>Current</th>").count(), 2);
    }

    #[test]
    fn test_render_rows_in_insertion_order() {
        let html = formatter(false).render(&sample_report());
        let slf4j = html.find("org.slf4j:slf4j-api").unwrap();
        let junit = html.find("junit:junit").unwrap();
        assert!(slf4j < junit);
    }

    #[test]
    fn test_render_severity_classes() {
        let html = formatter(false).render(&sample_report());
        assert!(html.contains("<td class=\"current major-behind\">1.7.36</td>"));
        assert!(html.contains("<td class=\"current patch-behind\">4.13.1</td>"));
        assert!(html.contains("<td class=\"current minor-behind\">1.0.0</td>"));
    }

    #[test]
    fn test_render_artifact_link() {
        let html = formatter(false).render(&sample_report());
        assert!(html.contains(
            "<a href=\"https://mvnrepository.com/artifact/org.slf4j/slf4j-api/1.7.36\">org.slf4j:slf4j-api</a>"
        ));
    }

    #[test]
    fn test_render_artifact_without_group_is_plain() {
        let mut report = DependencyReport::new();
        report.push("core", DependencyRecord::new("standalone", "1.0", "2.0"));
        let html = formatter(false).render(&report);
        assert!(html.contains("<td class=\"artifact\">standalone</td>"));
    }

    #[test]
    fn test_render_custom_artifact_url() {
        let config = OutputConfig {
            artifact_url: "https://repo.example.com/artifact/".to_string(),
            generated_at: None,
            ..OutputConfig::default()
        };
        let html = HtmlFormatter::new(&config).render(&sample_report());
        assert!(html.contains("href=\"https://repo.example.com/artifact/junit/junit/4.13.1\""));
    }

    #[test]
    fn test_render_escapes_text() {
        let mut report = DependencyReport::new();
        report.push("<core>", DependencyRecord::new("a&b:c", "1.0", "2.0\"x"));
        let html = formatter(false).render(&report);
        assert!(html.contains("<th>&lt;core&gt;</th>"));
        assert!(html.contains("a&amp;b:c"));
        assert!(html.contains("2.0&quot;x"));
    }

    #[test]
    fn test_render_unnamed_module() {
        let mut report = DependencyReport::new();
        report.push("", DependencyRecord::new("a:a", "1.0", "2.0"));
        let html = formatter(false).render(&report);
        assert!(html.contains("<th>(no module)</th>"));
    }

    #[test]
    fn test_render_empty_report() {
        let html = formatter(false).render(&DependencyReport::new());
        assert!(html.contains("No dependency updates found"));
        assert!(!html.contains("<table>"));
        assert!(html.contains("0 modules, 0 dependencies"));
    }

    #[test]
    fn test_render_summary_and_title() {
        let config = OutputConfig {
            title: "Nightly".to_string(),
            generated_at: None,
            ..OutputConfig::default()
        };
        let html = HtmlFormatter::new(&config).render(&sample_report());
        assert!(html.contains("<title>Nightly</title>"));
        assert!(html.contains("<h1>Nightly</h1>"));
        assert!(html.contains("2 modules, 3 dependencies: 1 major, 1 minor, 1 patch, 0 up-to-date"));
    }

    #[test]
    fn test_render_timestamp_footer() {
        let config = OutputConfig {
            generated_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()),
            ..OutputConfig::default()
        };
        let html = HtmlFormatter::new(&config).render(&sample_report());
        assert!(html.contains("<footer>Generated 2024-01-15 10:00:00 UTC</footer>"));

        let html = formatter(false).render(&sample_report());
        assert!(!html.contains("<footer>"));
    }

    #[test]
    fn test_format_minified() {
        let unminified = formatter(false).render(&sample_report());
        let html = render_to_string(&formatter(true), &sample_report());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.len() < unminified.len());
        assert!(html.contains("<th>core</th><th>Current</th><th>Latest</th></tr>"));
        assert!(html.contains("<td class=\"current major-behind\">1.7.36</td>"));
    }

    #[test]
    fn test_format_falls_back_when_minifier_fails() {
        let formatter = formatter(true).with_minifier(Box::new(BrokenMinifier));
        let html = render_to_string(&formatter, &sample_report());
        assert_eq!(html, formatter.render(&sample_report()));
    }

    #[test]
    fn test_format_unminified() {
        let html = render_to_string(&formatter(false), &sample_report());
        assert_eq!(html, formatter(false).render(&sample_report()));
    }
}
