//! # Localization Module
//!
//! Fluent-based localization for every user-facing string the bot sends.
//! Bundles are loaded once at startup from `./locales/<locale>/main.ftl`;
//! lookups fall back to English when the user's Telegram language code has
//! no bundle.

use anyhow::Result;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, OnceLock};
use unic_langid::LanguageIdentifier;

const SUPPORTED_LOCALES: [&str; 2] = ["en", "fr"];
const FALLBACK_LOCALE: &str = "en";

/// Localization manager for the PantryChef bot
pub struct LocalizationManager {
    bundles: HashMap<String, Arc<FluentBundle<FluentResource>>>,
}

impl LocalizationManager {
    /// Create a new localization manager with all supported locales loaded
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for locale in SUPPORTED_LOCALES {
            let langid: LanguageIdentifier = locale.parse()?;
            let bundle = Self::create_bundle(&langid)?;
            bundles.insert(locale.to_string(), Arc::new(bundle));
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(locale: &LanguageIdentifier) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Directional isolation marks confuse Telegram clients
        bundle.set_use_isolating(false);

        let resource_path = format!("./locales/{}/main.ftl", locale);
        if let Ok(content) = fs::read_to_string(&resource_path) {
            if let Ok(resource) = FluentResource::try_new(content) {
                let _ = bundle.add_resource(resource);
            }
        }

        Ok(bundle)
    }

    fn resolve_bundle(&self, language_code: Option<&str>) -> &FluentBundle<FluentResource> {
        let primary = language_code
            .and_then(|code| code.split('-').next())
            .unwrap_or(FALLBACK_LOCALE);

        self.bundles
            .get(primary)
            .or_else(|| self.bundles.get(FALLBACK_LOCALE))
            .map(|bundle| bundle.as_ref())
            .expect("Fallback locale bundle should always be loaded")
    }

    /// Get a localized message for the given language code
    pub fn get_message(
        &self,
        key: &str,
        language_code: Option<&str>,
        args: Option<&FluentArgs>,
    ) -> String {
        let bundle = self.resolve_bundle(language_code);

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut errors = vec![];
        bundle.format_pattern(pattern, args, &mut errors).to_string()
    }
}

/// Global localization instance
static LOCALIZATION_MANAGER: OnceLock<LocalizationManager> = OnceLock::new();

/// Initialize the global localization manager
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_localization() -> Result<()> {
    if LOCALIZATION_MANAGER.get().is_none() {
        let manager = LocalizationManager::new()?;
        let _ = LOCALIZATION_MANAGER.set(manager);
        log::info!("Localization initialized");
    }
    Ok(())
}

/// Get the global localization manager
pub fn get_localization_manager() -> &'static LocalizationManager {
    LOCALIZATION_MANAGER
        .get()
        .expect("Localization manager not initialized")
}

/// Convenience function to get a localized message
pub fn t_lang(key: &str, language_code: Option<&str>) -> String {
    get_localization_manager().get_message(key, language_code, None)
}

/// Convenience function to get a localized message with arguments
pub fn t_args_lang(key: &str, args: &[(&str, &str)], language_code: Option<&str>) -> String {
    let mut fluent_args = FluentArgs::new();
    for (name, value) in args {
        fluent_args.set(*name, FluentValue::from(*value));
    }
    get_localization_manager().get_message(key, language_code, Some(&fluent_args))
}
