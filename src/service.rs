//! Preference service: theme application, currency display, cross-tab sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `PreferenceService` exists per page. It owns no state of its own: the
//! injected `PreferenceStore` is the source of truth and the injected
//! `PageSurface` is where results are rendered. Page load runs
//! [`PreferenceService::init_app`] once; afterwards the page reacts only to
//! selector changes and to other tabs' writes delivered through
//! [`PreferenceService::listen`].
//!
//! DEGRADATION
//! ===========
//! Nothing here fails visibly. Unreadable or empty stored values fall back to
//! the configured defaults, failed writes are logged and skipped, missing
//! elements are skipped, and unparseable amounts render as `NaN`.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::consts::BUDGET_PREFIX;
use crate::currency::Currency;
use crate::number::parse_float;
use crate::page::PageSurface;
use crate::store::{PreferenceStore, StorageChange, Subscription};
use crate::theme::Theme;

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

pub struct PreferenceService<S, P> {
    store: Rc<S>,
    page: Rc<RefCell<P>>,
    config: Rc<PageConfig>,
}

impl<S, P> Clone for PreferenceService<S, P> {
    fn clone(&self) -> Self {
        Self { store: Rc::clone(&self.store), page: Rc::clone(&self.page), config: Rc::clone(&self.config) }
    }
}

impl<S, P> fmt::Debug for PreferenceService<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceService").field("config", &self.config).finish_non_exhaustive()
    }
}

impl<S, P> PreferenceService<S, P>
where
    S: PreferenceStore + 'static,
    P: PageSurface + 'static,
{
    pub fn new(store: S, page: P) -> Self {
        Self::with_config(store, page, PageConfig::default())
    }

    pub fn with_config(store: S, page: P, config: PageConfig) -> Self {
        Self { store: Rc::new(store), page: Rc::new(RefCell::new(page)), config: Rc::new(config) }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn page(&self) -> Ref<'_, P> {
        self.page.borrow()
    }

    pub fn page_mut(&self) -> RefMut<'_, P> {
        self.page.borrow_mut()
    }

    // --- Store access ---

    /// Read `key`, treating errors and empty strings as absent.
    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("preference read failed ({}): {e}", e.error_code());
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("preference write skipped ({}): {e}", e.error_code());
        }
    }

    /// Persisted currency, or the configured default.
    pub fn current_currency(&self) -> Currency {
        match self.read(&self.config.keys.currency) {
            Some(code) => Currency::from_code(&code),
            None => Currency::from_code(&self.config.defaults.currency),
        }
    }

    /// Persisted theme, or the configured default when absent or unrecognized.
    pub fn current_theme(&self) -> Theme {
        self.read(&self.config.keys.theme)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(self.config.defaults.theme)
    }

    /// Persisted monthly budget. Missing, unparseable, or zero values read as `0`.
    pub fn monthly_budget(&self) -> f64 {
        let budget = self.read(&self.config.keys.monthly_budget).map_or(f64::NAN, |raw| parse_float(&raw));
        if budget.is_nan() || budget == 0.0 { 0.0 } else { budget }
    }

    // --- Currency formatting ---

    /// Format `amount` in `currency_code`, or in the persisted currency when no
    /// (or an empty) code is given.
    pub fn format_currency(&self, amount: f64, currency_code: Option<&str>) -> String {
        self.effective_currency(currency_code).format(amount)
    }

    /// Like [`Self::format_currency`] for amounts given as text.
    pub fn format_currency_text(&self, amount: &str, currency_code: Option<&str>) -> String {
        self.effective_currency(currency_code).format_text(amount)
    }

    fn effective_currency(&self, currency_code: Option<&str>) -> Currency {
        match currency_code.filter(|code| !code.is_empty()) {
            Some(code) => Currency::from_code(code),
            None => self.current_currency(),
        }
    }

    // --- Theme ---

    /// Apply `theme` to the page and persist it.
    ///
    /// The dark class is always removed first, then re-added when the
    /// effective theme is dark. The requested value is persisted, so `Auto`
    /// stays `auto` across reloads.
    pub fn apply_theme(&self, theme: Theme) {
        let dark_class = &self.config.dom.dark_class;
        let effective = {
            let mut page = self.page.borrow_mut();
            page.remove_body_class(dark_class);
            let effective = theme.resolve(|| page.prefers_dark());
            if effective.is_dark() {
                page.add_body_class(dark_class);
            }
            effective
        };
        log::debug!("theme applied: requested={theme} effective={effective:?}");

        self.write(&self.config.keys.theme, theme.as_str());
        self.page.borrow_mut().set_control_value(&self.config.dom.theme_control, theme.as_str());
    }

    /// Apply the persisted theme (default `light`). Returns the applied theme.
    pub fn init_theme(&self) -> Theme {
        let theme = self.current_theme();
        self.apply_theme(theme);
        theme
    }

    // --- Currency ---

    /// Sync the currency selector to the persisted currency and return it.
    pub fn init_currency(&self) -> Currency {
        let currency = self.current_currency();
        self.page.borrow_mut().set_control_value(&self.config.dom.currency_control, currency.code());
        currency
    }

    /// Persist a currency chosen on this page and re-render amounts.
    pub fn select_currency(&self, code: &str) {
        let currency = if code.is_empty() {
            Currency::from_code(&self.config.defaults.currency)
        } else {
            Currency::from_code(code)
        };
        self.write(&self.config.keys.currency, currency.code());
        self.page.borrow_mut().set_control_value(&self.config.dom.currency_control, currency.code());
        self.update_currency_displays();
    }

    /// Persist the monthly budget and refresh the budget line.
    pub fn set_monthly_budget(&self, amount: f64) {
        self.write(&self.config.keys.monthly_budget, &amount.to_string());
        self.refresh_budget_text(&self.current_currency());
    }

    /// Re-render monetary elements and the budget line in the persisted currency.
    ///
    /// Only elements whose text still contains `$` are rewritten: the first
    /// `$` is dropped and the rest is re-parsed as an amount. Text already
    /// rendered with another symbol is left alone, and grouped amounts such as
    /// `$1,234.50` re-parse only up to the first comma. Returns the number of
    /// elements rewritten.
    pub fn update_currency_displays(&self) -> usize {
        let currency = self.current_currency();
        let rewritten = self.page.borrow_mut().rewrite_texts(&self.config.dom.monetary_classes, &mut |text: &str| {
            text.contains('$').then(|| currency.format_text(&text.replacen('$', "", 1)))
        });
        self.refresh_budget_text(&currency);
        log::debug!("currency displays updated: currency={currency} rewritten={rewritten}");
        rewritten
    }

    fn refresh_budget_text(&self, currency: &Currency) {
        let line = format!("{BUDGET_PREFIX}{}", currency.format(self.monthly_budget()));
        self.page.borrow_mut().set_text(&self.config.dom.budget_text, &line);
    }

    /// Page-load sequence: theme, then currency selector, then amounts.
    pub fn init_app(&self) {
        self.init_theme();
        let currency = self.init_currency();
        self.update_currency_displays();
        log::info!("page preferences initialized: currency={currency}");
    }

    // --- Cross-tab sync ---

    /// React to a change written by another tab.
    pub fn handle_storage_change(&self, change: &StorageChange) {
        let keys = &self.config.keys;
        if change.key == keys.theme {
            let theme = change
                .new_value
                .as_deref()
                .and_then(Theme::parse)
                .unwrap_or(self.config.defaults.theme);
            log::debug!("theme changed in another tab: {:?}", change.new_value);
            self.apply_theme(theme);
        }
        if change.key == keys.currency {
            log::debug!("currency changed in another tab: {:?}", change.new_value);
            self.update_currency_displays();
        }
    }

    /// Start reacting to other tabs. Dispose the returned subscription to stop.
    pub fn listen(&self) -> Subscription {
        let service = self.clone();
        self.store.subscribe(Box::new(move |change: &StorageChange| service.handle_storage_change(change)))
    }
}
