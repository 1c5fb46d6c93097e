use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Providers with known local-part semantics.
///
/// Every domain in these tables is treated as case-insensitive in the
/// local-part as well, which is why each provider carries its own lowercase
/// switch in [`Config`](crate::Config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Provider {
    Gmail,
    Icloud,
    OutlookDotCom,
    Yahoo,
    Yandex,
}

const YANDEX_DOMAINS: &[&str] = &[
    "yandex.ru",
    "yandex.ua",
    "yandex.kz",
    "yandex.com",
    "yandex.by",
    "ya.ru",
];

const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];

const ICLOUD_DOMAINS: &[&str] = &["icloud.com", "me.com"];

const OUTLOOKDOTCOM_DOMAINS: &[&str] = &[
    "hotmail.at",
    "hotmail.be",
    "hotmail.ca",
    "hotmail.cl",
    "hotmail.co.il",
    "hotmail.co.nz",
    "hotmail.co.th",
    "hotmail.co.uk",
    "hotmail.com",
    "hotmail.com.ar",
    "hotmail.com.au",
    "hotmail.com.br",
    "hotmail.com.gr",
    "hotmail.com.mx",
    "hotmail.com.pe",
    "hotmail.com.tr",
    "hotmail.com.vn",
    "hotmail.cz",
    "hotmail.de",
    "hotmail.dk",
    "hotmail.es",
    "hotmail.fr",
    "hotmail.hu",
    "hotmail.id",
    "hotmail.ie",
    "hotmail.in",
    "hotmail.it",
    "hotmail.jp",
    "hotmail.kr",
    "hotmail.lv",
    "hotmail.my",
    "hotmail.ph",
    "hotmail.pt",
    "hotmail.sa",
    "hotmail.sg",
    "hotmail.sk",
    "live.be",
    "live.ca",
    "live.co.uk",
    "live.com",
    "live.com.ar",
    "live.com.mx",
    "live.de",
    "live.es",
    "live.eu",
    "live.fr",
    "live.ie",
    "live.in",
    "live.it",
    "live.jp",
    "live.my",
    "live.nl",
    "live.no",
    "live.ph",
    "live.pt",
    "live.se",
    "msn.com",
    "outlook.at",
    "outlook.be",
    "outlook.cl",
    "outlook.co.il",
    "outlook.co.nz",
    "outlook.co.th",
    "outlook.com",
    "outlook.com.ar",
    "outlook.com.au",
    "outlook.com.br",
    "outlook.com.gr",
    "outlook.com.mx",
    "outlook.com.pe",
    "outlook.com.tr",
    "outlook.com.vn",
    "outlook.cz",
    "outlook.de",
    "outlook.dk",
    "outlook.es",
    "outlook.fr",
    "outlook.hu",
    "outlook.id",
    "outlook.ie",
    "outlook.in",
    "outlook.it",
    "outlook.jp",
    "outlook.kr",
    "outlook.lv",
    "outlook.my",
    "outlook.ph",
    "outlook.pt",
    "outlook.sa",
    "outlook.sg",
    "outlook.sk",
];

const YAHOO_DOMAINS: &[&str] = &[
    "rocketmail.com",
    "yahoo.ca",
    "yahoo.co.uk",
    "yahoo.com",
    "yahoo.de",
    "yahoo.fr",
    "yahoo.in",
    "yahoo.it",
    "ymail.com",
];

/// Every Yandex national TLD collapses onto this domain.
pub(crate) const YANDEX_CANONICAL_DOMAIN: &str = "yandex.ru";

/// Target of the `googlemail.com` rewrite.
pub(crate) const GMAIL_CANONICAL_DOMAIN: &str = "gmail.com";

/// Alias tables in precedence order. The tables are disjoint today, but the
/// first table claiming a domain wins should they ever overlap.
const DOMAIN_TABLES: &[(Provider, &[&str])] = &[
    (Provider::Yandex, YANDEX_DOMAINS),
    (Provider::Gmail, GMAIL_DOMAINS),
    (Provider::Icloud, ICLOUD_DOMAINS),
    (Provider::OutlookDotCom, OUTLOOKDOTCOM_DOMAINS),
    (Provider::Yahoo, YAHOO_DOMAINS),
];

static DOMAIN_LOOKUP: Lazy<HashMap<&'static str, Provider>> = Lazy::new(|| {
    let mut lookup = HashMap::new();
    for (provider, domains) in DOMAIN_TABLES {
        for domain in *domains {
            lookup.entry(*domain).or_insert(*provider);
        }
    }
    lookup
});

/// Looks up an already-lowercased domain against the provider tables.
pub(crate) fn resolve(domain: &str) -> Option<Provider> {
    DOMAIN_LOOKUP.get(domain).copied()
}
