//! Stacking layers

use crate::tree::token_leaves;

/// Semantic layer keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ZIndexToken {
    Hide,
    Base,
    Dropdown,
    Sticky,
    Fixed,
    Overlay,
    Modal,
    Popover,
    Toast,
    Tooltip,
}

/// Complete set of z-index layers, lowest first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZIndexTokens {
    pub hide: i32,
    pub base: i32,
    pub dropdown: i32,
    pub sticky: i32,
    pub fixed: i32,
    pub overlay: i32,
    pub modal: i32,
    pub popover: i32,
    pub toast: i32,
    pub tooltip: i32,
}

impl ZIndexTokens {
    pub fn get(&self, token: ZIndexToken) -> i32 {
        match token {
            ZIndexToken::Hide => self.hide,
            ZIndexToken::Base => self.base,
            ZIndexToken::Dropdown => self.dropdown,
            ZIndexToken::Sticky => self.sticky,
            ZIndexToken::Fixed => self.fixed,
            ZIndexToken::Overlay => self.overlay,
            ZIndexToken::Modal => self.modal,
            ZIndexToken::Popover => self.popover,
            ZIndexToken::Toast => self.toast,
            ZIndexToken::Tooltip => self.tooltip,
        }
    }
}

impl Default for ZIndexTokens {
    fn default() -> Self {
        Self {
            hide: -1,
            base: 0,
            dropdown: 1000,
            sticky: 1100,
            fixed: 1200,
            overlay: 1300,
            modal: 1400,
            popover: 1500,
            toast: 1600,
            tooltip: 1700,
        }
    }
}

token_leaves!(ZIndexTokens {
    hide => "hide",
    base => "base",
    dropdown => "dropdown",
    sticky => "sticky",
    fixed => "fixed",
    overlay => "overlay",
    modal => "modal",
    popover => "popover",
    toast => "toast",
    tooltip => "tooltip",
});
