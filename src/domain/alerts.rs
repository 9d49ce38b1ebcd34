// Government and AMBER alert models
use super::dashboard::ListItem;
use serde::{Deserialize, Serialize};

/// Alert lists are capped at this many entries, source order preserved.
pub const MAX_LIST_ITEMS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default, rename = "areaDesc")]
    pub area_desc: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub effective: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertsResponse {
    pub alerts: Vec<AlertItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmberItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmberResponse {
    pub items: Vec<AmberItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn alert_text(alert: &AlertItem) -> String {
    let mut text = format!(
        "{}: {} ({})",
        present(&alert.event).unwrap_or("Alert"),
        present(&alert.headline).unwrap_or("No headline"),
        present(&alert.area_desc).unwrap_or("Unknown area"),
    );
    if let Some(severity) = present(&alert.severity) {
        text.push_str(&format!(" [{}]", severity));
    }
    text
}

pub fn render_alerts(alerts: &[AlertItem]) -> Vec<ListItem> {
    if alerts.is_empty() {
        return vec![ListItem::text("No active alerts.")];
    }
    alerts
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(|a| ListItem::text(alert_text(a)))
        .collect()
}

pub fn render_amber(items: &[AmberItem]) -> Vec<ListItem> {
    if items.is_empty() {
        return vec![ListItem::text("No active AMBER alerts.")];
    }
    items
        .iter()
        .take(MAX_LIST_ITEMS)
        .map(|item| ListItem {
            text: present(&item.title).unwrap_or("AMBER Alert").to_string(),
            link: present(&item.link).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(n: usize) -> AlertItem {
        AlertItem {
            event: Some(format!("Event {}", n)),
            headline: Some(format!("Headline {}", n)),
            area_desc: Some("Maricopa".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_alerts_truncates_to_first_ten() {
        let alerts: Vec<AlertItem> = (0..15).map(alert).collect();
        let rendered = render_alerts(&alerts);

        assert_eq!(rendered.len(), 10);
        for (i, item) in rendered.iter().enumerate() {
            assert_eq!(item.text, format!("Event {}: Headline {} (Maricopa)", i, i));
        }
    }

    #[test]
    fn test_render_amber_truncates_and_keeps_links() {
        let items: Vec<AmberItem> = (0..15)
            .map(|n| AmberItem {
                title: Some(format!("Child {}", n)),
                link: Some(format!("https://example.org/{}", n)),
                description: None,
            })
            .collect();
        let rendered = render_amber(&items);

        assert_eq!(rendered.len(), 10);
        assert_eq!(rendered[0].text, "Child 0");
        assert_eq!(rendered[9].link.as_deref(), Some("https://example.org/9"));
    }

    #[test]
    fn test_missing_fields_use_fallback_text() {
        let rendered = render_alerts(&[AlertItem::default()]);
        assert_eq!(rendered[0].text, "Alert: No headline (Unknown area)");

        let rendered = render_amber(&[AmberItem::default()]);
        assert_eq!(rendered[0].text, "AMBER Alert");
        assert_eq!(rendered[0].link, None);
    }

    #[test]
    fn test_severity_is_appended() {
        let mut a = alert(1);
        a.severity = Some("Severe".to_string());
        assert_eq!(alert_text(&a), "Event 1: Headline 1 (Maricopa) [Severe]");
    }

    #[test]
    fn test_empty_lists_render_notice() {
        assert_eq!(render_alerts(&[])[0].text, "No active alerts.");
        assert_eq!(render_amber(&[])[0].text, "No active AMBER alerts.");
    }

    #[test]
    fn test_alerts_response_requires_list() {
        assert!(serde_json::from_str::<AlertsResponse>(r#"{"source": "NWS"}"#).is_err());
        let parsed: AlertsResponse =
            serde_json::from_str(r#"{"alerts": [{"event": "Heat", "areaDesc": "Pima"}]}"#).unwrap();
        assert_eq!(parsed.alerts[0].area_desc.as_deref(), Some("Pima"));
    }
}
