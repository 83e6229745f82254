//! JavaScript surface.
//!
//! A page calls `start()` once, builds a `PagePreferences` (optionally with a
//! JSON config), then `initApp()` and `listen()` on load. Selector `change`
//! handlers call `applyTheme` / `selectCurrency`.

use wasm_bindgen::prelude::*;

use super::{DocumentPage, LocalStorage};
use crate::config::PageConfig;
use crate::consts::{CURRENCY_KEY, DEFAULT_CURRENCY};
use crate::currency::{Currency, currency_symbol as symbol_for};
use crate::number::parse_float;
use crate::service::PreferenceService;
use crate::store::{PreferenceStore, Subscription};
use crate::theme::Theme;

/// Install the panic hook and console logger.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {e}")));
    }
}

/// Coerce a JS amount the way `parseFloat` would: numbers pass through,
/// strings are parsed leniently, anything else is NaN.
fn amount_from_js(amount: &JsValue) -> f64 {
    if let Some(number) = amount.as_f64() {
        return number;
    }
    amount.as_string().map_or(f64::NAN, |text| parse_float(&text))
}

/// Format `amount` in `currencyCode`, or in the persisted currency, or USD.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: JsValue, currency_code: Option<String>) -> String {
    let code = currency_code.filter(|c| !c.is_empty()).or_else(stored_currency);
    let currency = Currency::from_code(code.as_deref().unwrap_or(DEFAULT_CURRENCY));
    currency.format(amount_from_js(&amount))
}

fn stored_currency() -> Option<String> {
    let storage = match LocalStorage::open() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("currency lookup skipped: {e}");
            return None;
        }
    };
    match storage.get(CURRENCY_KEY) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("currency lookup failed: {e}");
            None
        }
    }
}

#[wasm_bindgen(js_name = currencySymbol)]
pub fn currency_symbol(code: &str) -> String {
    symbol_for(code).to_string()
}

/// Preference handling for the current page.
#[wasm_bindgen]
pub struct PagePreferences {
    service: PreferenceService<LocalStorage, DocumentPage>,
    subscription: Option<Subscription>,
}

#[wasm_bindgen]
impl PagePreferences {
    /// Attach to `localStorage` and `document`. `config` is an optional
    /// partial JSON `PageConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<PagePreferences, JsError> {
        let config = match config.as_deref() {
            Some(raw) => PageConfig::from_json(raw)?,
            None => PageConfig::default(),
        };
        let store = LocalStorage::open()?;
        let page = DocumentPage::attach()?;
        Ok(Self { service: PreferenceService::with_config(store, page, config), subscription: None })
    }

    #[wasm_bindgen(js_name = initApp)]
    pub fn init_app(&self) {
        self.service.init_app();
    }

    /// Apply `theme` (`light`, `dark`, `auto`); other names apply the default theme.
    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&self, theme: &str) {
        let theme = Theme::parse(theme).unwrap_or(self.service.config().defaults.theme);
        self.service.apply_theme(theme);
    }

    #[wasm_bindgen(js_name = initTheme)]
    pub fn init_theme(&self) -> String {
        self.service.init_theme().as_str().to_string()
    }

    #[wasm_bindgen(js_name = initCurrency)]
    pub fn init_currency(&self) -> String {
        self.service.init_currency().code().to_string()
    }

    #[wasm_bindgen(js_name = updateCurrencyDisplays)]
    pub fn update_currency_displays(&self) -> usize {
        self.service.update_currency_displays()
    }

    #[wasm_bindgen(js_name = selectCurrency)]
    pub fn select_currency(&self, code: &str) {
        self.service.select_currency(code);
    }

    #[wasm_bindgen(js_name = setMonthlyBudget)]
    pub fn set_monthly_budget(&self, amount: JsValue) {
        self.service.set_monthly_budget(amount_from_js(&amount));
    }

    #[wasm_bindgen(js_name = formatCurrency)]
    pub fn format_currency(&self, amount: JsValue, currency_code: Option<String>) -> String {
        self.service.format_currency(amount_from_js(&amount), currency_code.as_deref())
    }

    /// Start reacting to other tabs. Calling it again keeps the existing listener.
    pub fn listen(&mut self) {
        if self.subscription.is_none() {
            self.subscription = Some(self.service.listen());
        }
    }

    /// Stop reacting to other tabs.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
    }
}
