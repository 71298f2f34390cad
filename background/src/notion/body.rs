//! Create-page request body.
//!
//! Notion rejects properties whose value is null, so every optional field
//! is skipped entirely when it has no value. Empty strings count as no
//! value; a pay of 0 does not.

use common::JobApplicationDetails;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: PageProperties<'a>,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Serialize)]
struct PageProperties<'a> {
    title: TitleProperty<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<SelectProperty<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<RichTextProperty<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<RichTextProperty<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pay_per_hour: Option<NumberProperty>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    job_type: Option<RichTextProperty<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<DateProperty<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<RichTextProperty<'a>>,
}

#[derive(Debug, Serialize)]
struct TextItem<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: Text<'a>,
}

#[derive(Debug, Serialize)]
struct Text<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<Link<'a>>,
}

#[derive(Debug, Serialize)]
struct Link<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct TitleProperty<'a> {
    title: Vec<TextItem<'a>>,
}

#[derive(Debug, Serialize)]
struct RichTextProperty<'a> {
    rich_text: Vec<TextItem<'a>>,
}

#[derive(Debug, Serialize)]
struct SelectProperty<'a> {
    select: Named<'a>,
}

#[derive(Debug, Serialize)]
struct Named<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct NumberProperty {
    number: f64,
}

#[derive(Debug, Serialize)]
struct DateProperty<'a> {
    date: DateStart<'a>,
}

#[derive(Debug, Serialize)]
struct DateStart<'a> {
    start: &'a str,
}

fn text_item<'a>(content: &'a str, link: Option<&'a str>) -> TextItem<'a> {
    TextItem {
        kind: "text",
        text: Text {
            content,
            link: link.map(|url| Link { url }),
        },
    }
}

fn present(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

fn rich_text(value: &str) -> Option<RichTextProperty<'_>> {
    present(value).map(|content| RichTextProperty {
        rich_text: vec![text_item(content, None)],
    })
}

impl<'a> CreatePageRequest<'a> {
    pub fn new(database_id: &'a str, details: &'a JobApplicationDetails) -> Self {
        let job = &details.job;

        // serde_json would write a non-finite number as null
        let pay_per_hour = details.pay_per_hour.and_then(|pay| {
            if pay.is_finite() {
                Some(NumberProperty { number: pay })
            } else {
                tracing::warn!(pay, "Dropping non-finite pay_per_hour");
                None
            }
        });

        Self {
            parent: Parent { database_id },
            properties: PageProperties {
                title: TitleProperty {
                    title: vec![text_item(&job.title, present(&job.url))],
                },
                status: present(&details.status).map(|name| SelectProperty {
                    select: Named { name },
                }),
                notes: rich_text(&details.notes),
                company: rich_text(&job.company),
                pay_per_hour,
                job_type: rich_text(&job.job_type),
                deadline: job
                    .deadline
                    .as_deref()
                    .and_then(present)
                    .map(|start| DateProperty {
                        date: DateStart { start },
                    }),
                location: rich_text(&job.location),
            },
        }
    }
}
