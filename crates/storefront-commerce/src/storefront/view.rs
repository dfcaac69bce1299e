//! Selection and modal flags.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Admin editor modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormModal {
    Product,
    Category,
    Brand,
}

/// Which product is inspected and which panels are open.
///
/// The flags are independent; the cart panel and the quick-view modal can be
/// open at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Product last opened in quick view. Kept after the modal closes.
    pub selected_product: Option<ProductId>,
    pub cart_open: bool,
    pub quick_view_open: bool,
    pub product_form_open: bool,
    pub category_form_open: bool,
    pub brand_form_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_quick_view(&mut self, id: ProductId) {
        self.selected_product = Some(id);
        self.quick_view_open = true;
    }

    pub fn close_quick_view(&mut self) {
        self.quick_view_open = false;
    }

    pub fn open_form(&mut self, form: FormModal) {
        *self.form_flag(form) = true;
    }

    pub fn close_form(&mut self, form: FormModal) {
        *self.form_flag(form) = false;
    }

    pub fn is_form_open(&self, form: FormModal) -> bool {
        match form {
            FormModal::Product => self.product_form_open,
            FormModal::Category => self.category_form_open,
            FormModal::Brand => self.brand_form_open,
        }
    }

    fn form_flag(&mut self, form: FormModal) -> &mut bool {
        match form {
            FormModal::Product => &mut self.product_form_open,
            FormModal::Category => &mut self.category_form_open,
            FormModal::Brand => &mut self.brand_form_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_independent() {
        let mut view = ViewState::new();
        view.cart_open = true;
        view.open_quick_view(ProductId::new("3"));
        view.open_form(FormModal::Brand);

        assert!(view.cart_open);
        assert!(view.quick_view_open);
        assert!(view.is_form_open(FormModal::Brand));
        assert!(!view.is_form_open(FormModal::Product));

        view.close_form(FormModal::Brand);
        assert!(!view.brand_form_open);
    }

    #[test]
    fn test_close_keeps_selection() {
        let mut view = ViewState::new();
        view.open_quick_view(ProductId::new("3"));
        view.close_quick_view();
        assert!(!view.quick_view_open);
        assert_eq!(view.selected_product, Some(ProductId::new("3")));
    }
}
