use crate::config;

/// What a click on a link should do.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorClick {
    /// Not an in-page link (or the bare "#"): let the browser handle it.
    Ignore,
    /// In-page link without a matching element: swallow the click.
    Prevent,
    /// Close the mobile drawer and smooth-scroll to this offset.
    ScrollTo(f64),
}

impl AnchorClick {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorClick::Ignore)
    }

    /// Only a click that scrolls to a section closes the mobile drawer.
    pub fn closes_drawer(&self) -> bool {
        matches!(self, AnchorClick::ScrollTo(_))
    }
}

/// The element id an in-page link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// `offset_top` maps an element id to its offset from the top of the page.
pub fn plan_anchor_click<F>(href: &str, offset_top: F) -> AnchorClick
where
    F: FnOnce(&str) -> Option<f64>,
{
    let Some(id) = anchor_target(href) else {
        return AnchorClick::Ignore;
    };
    match offset_top(id) {
        Some(top) => AnchorClick::ScrollTo(top - config::ANCHOR_SCROLL_OFFSET),
        None => AnchorClick::Prevent,
    }
}
