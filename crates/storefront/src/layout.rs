//! Shared page chrome.
//!
//! Every full page embeds a [`LayoutView`]. `base.html` renders the header
//! (navigation, cart badge, language and theme switchers) and the footer
//! (company details, service links, copyright) from it.

use max_publishing_core::{Language, Localized, Theme};

use crate::i18n::{CompanyView, footer, labels, nav, services, theme};
use crate::middleware::{CspNonce, Visitor};
use crate::section::Section;
use crate::state::AppState;

labels!(LayoutLabels {
    main_menu => nav::MAIN_MENU,
    language => nav::LANGUAGE,
    cart => nav::CART,
    profile => nav::PROFILE,
    theme => theme::TOGGLE,
    company_info => footer::COMPANY_INFO,
    registered_office => footer::REGISTERED_OFFICE,
    operational_office => footer::OPERATIONAL_OFFICE,
    vat_number => footer::VAT_NUMBER,
    rea_number => footer::REA_NUMBER,
    share_capital => footer::SHARE_CAPITAL,
    services => footer::SERVICES,
    contact => footer::CONTACT,
    rights_reserved => footer::RIGHTS_RESERVED,
    privacy => footer::PRIVACY,
    terms => footer::TERMS,
});

#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct ThemeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn theme_label(value: Theme) -> &'static Localized {
    match value {
        Theme::Light => &theme::LIGHT,
        Theme::Dark => &theme::DARK,
        Theme::System => &theme::SYSTEM,
    }
}

/// Footer service links point at the anchors on the services page.
static SERVICE_LINKS: [(&str, &Localized); 3] = [
    ("/services#publishing", &services::PUBLISHING_TITLE),
    ("/services#bulk", &services::BULK_TITLE),
    ("/services#rights", &services::RIGHTS_TITLE),
];

/// Everything `base.html` needs.
#[derive(Debug, Clone)]
pub struct LayoutView {
    pub lang: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub nonce: String,
    pub theme: &'static str,
    pub theme_class: &'static str,
    pub follows_system: bool,
    pub themes: Vec<ThemeOption>,
    pub languages: Vec<LanguageOption>,
    pub nav: Vec<NavLink>,
    pub cart_active: bool,
    pub profile_active: bool,
    pub cart_count: u32,
    /// Where the preference forms send the visitor back to.
    pub current_path: String,
    pub user_name: Option<String>,
    pub service_links: Vec<NavLink>,
    pub company: CompanyView,
    pub labels: LayoutLabels,
    pub ga4_id: Option<String>,
}

impl LayoutView {
    #[must_use]
    pub fn new(
        state: &AppState,
        visitor: &Visitor,
        nonce: &CspNonce,
        section: Option<Section>,
        title: impl Into<String>,
    ) -> Self {
        let language = visitor.language;

        let nav = Section::NAV
            .into_iter()
            .map(|item| NavLink {
                href: item.path(),
                label: item.label().get(language),
                active: section == Some(item),
            })
            .collect();

        let languages = Language::ALL
            .into_iter()
            .map(|option| LanguageOption {
                code: option.code(),
                name: option.native_name(),
                selected: option == language,
            })
            .collect();

        let themes = Theme::ALL
            .into_iter()
            .map(|option| ThemeOption {
                value: option.as_str(),
                label: theme_label(option).get(language),
                selected: option == visitor.theme,
            })
            .collect();

        let service_links = SERVICE_LINKS
            .iter()
            .map(|&(href, label)| NavLink {
                href,
                label: label.get(language),
                active: false,
            })
            .collect();

        Self {
            lang: language.code(),
            title: title.into(),
            description: None,
            nonce: nonce.value().to_string(),
            theme: visitor.theme.as_str(),
            theme_class: visitor.theme.css_class(),
            follows_system: visitor.theme.follows_system(),
            themes,
            languages,
            nav,
            cart_active: section == Some(Section::Cart),
            profile_active: section == Some(Section::Profile),
            cart_count: visitor.cart.total_items(),
            current_path: visitor.path.clone(),
            user_name: visitor.profile.as_ref().map(|p| p.name.clone()),
            service_links,
            company: CompanyView::new(language),
            labels: LayoutLabels::new(language),
            ga4_id: state.config().analytics.ga4_measurement_id.clone(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
