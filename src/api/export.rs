//! Export trigger: PDF export via the host print pipeline
//!
//! Thin boundary over `window.print()`. Configures a fixed physical page
//! (A4, zero margin), asks the print engine to keep background colors
//! exactly as rendered, and names the resulting document. No layout
//! logic lives here; pagination has already shaped the rendered tree.

use wasm_bindgen::prelude::*;

use crate::wasm_warn;

/// Page configuration injected for the duration of the print flow
pub const PRINT_PAGE_STYLE: &str = "@page { size: A4; margin: 0mm; } \
@media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }";

const STYLE_ELEMENT_ID: &str = "resume-print-style";

/// Marks the subtree the host's print stylesheet scopes to
const PRINT_ROOT_ATTR: &str = "data-print-root";

/// Open the host print dialog over `root` with A4/zero-margin
/// configuration, optionally naming the resulting document.
///
/// The document title is swapped for the export name while the dialog is
/// open (browsers derive the PDF filename from it) and restored after.
/// Fails soft: with no window or document this logs and returns.
#[wasm_bindgen(js_name = openPrintDialog)]
pub fn open_print_dialog(root: &web_sys::Element, document_title: Option<String>) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            wasm_warn!("openPrintDialog: no window available");
            return;
        }
    };
    let document = match window.document() {
        Some(d) => d,
        None => {
            wasm_warn!("openPrintDialog: no document available");
            return;
        }
    };

    // Scope the host's print stylesheet to the rendered root
    let _ = root.set_attribute(PRINT_ROOT_ATTR, "true");

    // Inject the page configuration for the duration of the dialog
    let style = document.create_element("style").ok();
    if let Some(style) = &style {
        let _ = style.set_attribute("id", STYLE_ELEMENT_ID);
        style.set_text_content(Some(PRINT_PAGE_STYLE));
        if let Some(head) = document.head() {
            let _ = head.append_child(style);
        }
    }

    let previous_title = document.title();
    if let Some(title) = &document_title {
        document.set_title(title);
    }

    if let Err(e) = window.print() {
        wasm_warn!("openPrintDialog: print failed: {:?}", e);
    }

    // window.print() blocks until the dialog closes; restore afterwards
    if document_title.is_some() {
        document.set_title(&previous_title);
    }
    if let Some(style) = style {
        style.remove();
    }
    let _ = root.remove_attribute(PRINT_ROOT_ATTR);
}
