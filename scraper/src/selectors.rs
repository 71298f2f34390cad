//! CSS selectors for the job-detail layout.
//!
//! The portal is an Angular app, so several nodes are only distinguishable
//! by their `ng-reflect-*` attributes.

use scraper::Selector;
use std::sync::LazyLock;

pub const TITLE: &str = "a.job-title.ng-star-inserted";
pub const COMPANY: &str = "a.text-base.font-size-base";
pub const LOCATION: &str = r#"span.body-small[ng-reflect-ng-class="body-small"]"#;
pub const JOB_TYPE: &str =
    r#"span.body-small[ng-reflect-ng-class="body-small text-truncate block"]"#;
pub const DEADLINE: &str = "p[id=sy_formfield_job_deadline]";
pub const DESCRIPTION: &str =
    "div.text-overflow.space-top-lg.text-gray.p-group.field-widget-tinymce";
pub const DETAIL_CONTAINER: &str = ".form-static-list";
pub const DETAIL_NAME: &str = ".field-label.field-label-readonly.ng-star-inserted";
pub const DETAIL_VALUE: &str = ".field-widget.widget-readonly.field-widget-text";

fn compile(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css}: {e:?}"))
}

pub(crate) static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(TITLE));
pub(crate) static COMPANY_SEL: LazyLock<Selector> = LazyLock::new(|| compile(COMPANY));
pub(crate) static LOCATION_SEL: LazyLock<Selector> = LazyLock::new(|| compile(LOCATION));
pub(crate) static JOB_TYPE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(JOB_TYPE));
pub(crate) static DEADLINE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(DEADLINE));
pub(crate) static DESCRIPTION_SEL: LazyLock<Selector> = LazyLock::new(|| compile(DESCRIPTION));
pub(crate) static DETAIL_CONTAINER_SEL: LazyLock<Selector> =
    LazyLock::new(|| compile(DETAIL_CONTAINER));
pub(crate) static DETAIL_NAME_SEL: LazyLock<Selector> = LazyLock::new(|| compile(DETAIL_NAME));
pub(crate) static DETAIL_VALUE_SEL: LazyLock<Selector> = LazyLock::new(|| compile(DETAIL_VALUE));
