pub const PAGE_RANGE_DISPLAYED: u32 = 5;
pub const MARGIN_PAGES_DISPLAYED: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, active: bool },
    Ellipsis,
}

/// Lays out the page buttons: a window of `range` pages around `current`,
/// `margin` pages pinned at each end, and an ellipsis for every gap.
pub fn page_items(current: u32, total_pages: u32, range: u32, margin: u32) -> Vec<PageItem> {
    let page = |number: u32| PageItem::Page {
        number,
        active: number == current,
    };

    if total_pages <= range {
        return (1..=total_pages).map(page).collect();
    }

    // Zero-based arithmetic, signed so the window can hang off either end
    let selected = i64::from(current.clamp(1, total_pages)) - 1;
    let count = i64::from(total_pages);
    let range = i64::from(range);
    let margin = i64::from(margin);

    let mut left = range / 2;
    let mut right = range - left;
    if selected > count - right {
        right = count - selected;
        left = range - right;
    } else if selected < left {
        left = selected;
        right = range - left;
    }
    if selected == 0 && range > 1 {
        right -= 1;
    }

    let mut items = Vec::new();
    for index in 0..count {
        let number = index + 1;
        let in_margin = number <= margin || number > count - margin;
        let in_window = index >= selected - left && index <= selected + right;

        if in_margin || in_window {
            items.push(page(number as u32));
        } else if items.last() != Some(&PageItem::Ellipsis) {
            items.push(PageItem::Ellipsis);
        }
    }

    items
}
