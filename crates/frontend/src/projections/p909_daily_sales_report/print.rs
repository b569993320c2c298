//! Printing of the report card through a hidden iframe.
//!
//! Only the markup of the report anchor is printed, styled by a small
//! stylesheet of its own; the application chrome never reaches the printer.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlIFrameElement};

/// Element id of the printable report card
pub const REPORT_ANCHOR_ID: &str = "p909-daily-sales-report-print";

/// Delay before the print frame is removed once printing was triggered
pub const IFRAME_REMOVE_DELAY_MS: u32 = 300;

pub const PRINT_CSS: &str = r#"
@page { size: A4; margin: 14mm; }
body { font-family: Inter, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, sans-serif; color: #101828; }
.p909-card { background: #fff; }
.p909-header { display: flex; justify-content: space-between; padding: 0 0 10px 0; border-bottom: 1px solid #eef0f4; }
.p909-company .name { font-weight: 800; color: #252b55; }
.p909-company .addr { font-size: 12px; color: #667085; }
.p909-meta .report { font-weight: 800; color: #252b55; text-align: right; }
.p909-meta .date { font-size: 12px; color: #667085; text-align: right; }
.p909-summary { display: flex; gap: 18px; padding: 8px 0; font-size: 14px; color: #344054; border-bottom: 1px solid #f1f1f1; }
.p909-table { width: 100%; border-collapse: collapse; margin-top: 10px; }
.p909-table thead th { text-align: left; color: #344054; font-weight: 700; padding: 8px; border-bottom: 1px solid #eef0f4; background: #fafbff; font-size: 12px; }
.p909-table tbody td, .p909-table tfoot td { padding: 8px; border-bottom: 1px solid #f1f1f1; font-size: 12px; }
.p909-table .num { text-align: right; white-space: nowrap; }
.p909-table .total { font-weight: 700; color: #252b55; }
.p909-table .right { text-align: right; }
.p909-table .muted { color: #98a2b3; }
.p909-footer { margin-top: 8px; font-size: 12px; color: #98a2b3; }
* { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
"#;

#[derive(Debug, Error, PartialEq)]
pub enum PrintError {
    #[error("print anchor '{0}' is not mounted")]
    AnchorNotFound(String),
    #[error("no browser window")]
    NoWindow,
    #[error("document has no body")]
    NoBody,
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for PrintError {
    fn from(value: JsValue) -> Self {
        PrintError::Dom(format!("{:?}", value))
    }
}

/// Standalone HTML document around the report markup
pub fn build_print_document(markup: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Sales Report</title><style>{}</style></head><body>{}</body></html>",
        PRINT_CSS, markup
    )
}

/// Where the report markup comes from and where the print document goes
pub trait PrintSurfaceHost {
    /// Outer HTML of the element with the given id, if it is mounted
    fn report_markup(&self, anchor_id: &str) -> Option<String>;

    /// Shows the document on an isolated surface and opens the print dialog
    fn open_print_surface(&self, html: &str) -> Result<(), PrintError>;
}

/// Prints the element `anchor_id`. Nothing is created when the anchor is absent.
pub fn print_report_with<H: PrintSurfaceHost>(host: &H, anchor_id: &str) -> Result<(), PrintError> {
    let markup = host
        .report_markup(anchor_id)
        .ok_or_else(|| PrintError::AnchorNotFound(anchor_id.to_string()))?;
    host.open_print_surface(&build_print_document(&markup))
}

/// Prints through a zero-size iframe appended to the current document
pub struct BrowserPrintHost {
    document: Document,
}

impl BrowserPrintHost {
    pub fn from_window() -> Result<Self, PrintError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PrintError::NoWindow)?;
        Ok(Self { document })
    }

    fn create_frame(&self) -> Result<HtmlIFrameElement, PrintError> {
        let iframe: HtmlIFrameElement = self
            .document
            .create_element("iframe")?
            .dyn_into()
            .map_err(|_| PrintError::Dom("created element is not an iframe".to_string()))?;

        let style = iframe.style();
        for (name, value) in [
            ("position", "fixed"),
            ("width", "0"),
            ("height", "0"),
            ("border", "0"),
            ("right", "0"),
            ("bottom", "0"),
        ] {
            style.set_property(name, value)?;
        }
        iframe.set_attribute("aria-hidden", "true")?;
        Ok(iframe)
    }
}

impl PrintSurfaceHost for BrowserPrintHost {
    fn report_markup(&self, anchor_id: &str) -> Option<String> {
        self.document
            .get_element_by_id(anchor_id)
            .map(|element| element.outer_html())
    }

    fn open_print_surface(&self, html: &str) -> Result<(), PrintError> {
        let body = self.document.body().ok_or(PrintError::NoBody)?;
        let iframe = self.create_frame()?;

        let frame = iframe.clone();
        let on_load = Closure::once_into_js(move || {
            if let Some(window) = frame.content_window() {
                if let Err(e) = window.focus().and_then(|_| window.print()) {
                    log::error!("P909: print failed: {:?}", e);
                }
            }
            gloo_timers::callback::Timeout::new(IFRAME_REMOVE_DELAY_MS, move || frame.remove())
                .forget();
        });
        iframe.set_onload(Some(on_load.unchecked_ref::<js_sys::Function>()));

        // srcdoc is set before attaching, so `load` fires for the report document
        iframe.set_srcdoc(html);
        body.append_child(&iframe)?;
        Ok(())
    }
}

/// Prints the mounted report card of the current page
pub fn print_report(anchor_id: &str) -> Result<(), PrintError> {
    print_report_with(&BrowserPrintHost::from_window()?, anchor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        anchor: Option<(String, String)>,
        opened: RefCell<Vec<String>>,
    }

    impl FakeHost {
        fn with_anchor(id: &str, markup: &str) -> Self {
            Self {
                anchor: Some((id.to_string(), markup.to_string())),
                ..Default::default()
            }
        }
    }

    impl PrintSurfaceHost for FakeHost {
        fn report_markup(&self, anchor_id: &str) -> Option<String> {
            self.anchor
                .as_ref()
                .filter(|(id, _)| id == anchor_id)
                .map(|(_, markup)| markup.clone())
        }

        fn open_print_surface(&self, html: &str) -> Result<(), PrintError> {
            self.opened.borrow_mut().push(html.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_anchor_opens_nothing() {
        let host = FakeHost::default();
        assert_eq!(
            print_report_with(&host, REPORT_ANCHOR_ID),
            Err(PrintError::AnchorNotFound(REPORT_ANCHOR_ID.to_string()))
        );
        assert!(host.opened.borrow().is_empty());
    }

    #[test]
    fn test_prints_only_the_anchor_markup() {
        let card = r#"<div id="p909-daily-sales-report-print">Daily Sales Report</div>"#;
        let host = FakeHost::with_anchor(REPORT_ANCHOR_ID, card);

        print_report_with(&host, REPORT_ANCHOR_ID).unwrap();

        let opened = host.opened.borrow();
        assert_eq!(opened.len(), 1);
        let html = &opened[0];
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<title>Sales Report</title>"));
        assert!(html.contains("@page { size: A4; margin: 14mm; }"));
        assert!(html.contains(&format!("<body>{}</body>", card)));
    }

    #[test]
    fn test_other_anchor_is_ignored() {
        let host = FakeHost::with_anchor("toolbar", "<div>toolbar</div>");
        assert!(print_report_with(&host, REPORT_ANCHOR_ID).is_err());
        assert!(host.opened.borrow().is_empty());
    }
}
