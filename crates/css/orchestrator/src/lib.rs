//! Declarative styling of styleable elements.
//!
//! A [`Stylist`] takes a target element, a list of `"property: value"` rules,
//! an optional parent (the containing block), and optional children, and
//! mutates the elements in place:
//!
//! 1. rules are parsed into declarations,
//! 2. a [`StyleContext`] is built from the parent or the viewport,
//! 3. intrinsic declarations are applied, then positional ones, then pending
//!    percentage translations,
//! 4. children are laid out (flex distribution or a content-box offset).
//!
//! Every step is fail-soft: bad rules and values are skipped or resolve to
//! defaults. The only failure is building a `Stylist` without a usable viewport.

#![forbid(unsafe_code)]

pub mod config;
pub mod context;
mod dispatch;

pub use config::StylerConfig;
pub use context::StyleContext;

use anyhow::{Context as _, Result};
use css_color::Rgba;
use css_flexbox::layout_children;
use css_style_attr::{Declaration, parse_rules};
use css_values_units::Viewport;
use log::{debug, info};
use styleable::StyleHandle;

/// Entry point for styling calls, bound to one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stylist {
    viewport: Viewport,
}

impl Stylist {
    /// Bind a stylist to the configured viewport.
    ///
    /// # Errors
    /// Returns an error if the configured viewport is not a finite, positive size.
    pub fn new(config: &StylerConfig) -> Result<Self> {
        let viewport = config.viewport().context("configuring stylist")?;
        info!(target: "css::context", "stylist bound to {}x{} viewport", viewport.width, viewport.height);
        Ok(Self { viewport })
    }

    #[inline]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Style `target` with the viewport as its containing block.
    pub fn style<S: AsRef<str>>(&self, target: &StyleHandle, rules: &[S]) {
        self.apply(target, rules, None, &[]);
    }

    /// Style `target` inside `parent`.
    pub fn style_in<S: AsRef<str>>(&self, target: &StyleHandle, rules: &[S], parent: &StyleHandle) {
        self.apply(target, rules, Some(parent), &[]);
    }

    /// Style `target` with the viewport as its containing block, then lay out
    /// `children` inside it.
    pub fn style_children<S: AsRef<str>>(
        &self,
        target: &StyleHandle,
        rules: &[S],
        children: &[StyleHandle],
    ) {
        self.apply(target, rules, None, children);
    }

    /// Style `target` inside `parent`, then lay out `children` inside it.
    pub fn style_in_with_children<S: AsRef<str>>(
        &self,
        target: &StyleHandle,
        rules: &[S],
        parent: &StyleHandle,
        children: &[StyleHandle],
    ) {
        self.apply(target, rules, Some(parent), children);
    }

    /// Parse `rules` and apply them; the general form of the `style*` calls.
    pub fn apply<S: AsRef<str>>(
        &self,
        target: &StyleHandle,
        rules: &[S],
        parent: Option<&StyleHandle>,
        children: &[StyleHandle],
    ) {
        let declarations = parse_rules(rules);
        self.apply_declarations(target, &declarations, parent, children);
    }

    /// Apply already parsed declarations, for example from
    /// [`css_style_attr::parse_style_attribute`].
    pub fn apply_declarations(
        &self,
        target: &StyleHandle,
        declarations: &[Declaration],
        parent: Option<&StyleHandle>,
        children: &[StyleHandle],
    ) {
        debug!(
            target: "css::dispatch",
            "styling {} with {} declarations, {} children",
            target.type_name(),
            declarations.len(),
            children.len()
        );
        let mut context = StyleContext::new(target, parent, self.viewport);
        dispatch::apply_declarations(&mut context, declarations);
        layout_children(&context.target, &context.box_model, &context.flex, children);
    }

    /// Resolve a color value the way `background-color` and friends do.
    #[inline]
    pub fn parse_color(value: &str) -> Rgba {
        css_color::parse_color(value)
    }
}
