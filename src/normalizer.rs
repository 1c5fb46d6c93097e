use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::address;
use crate::config::Config;
use crate::providers::{self, Provider, GMAIL_CANONICAL_DOMAIN, YANDEX_CANONICAL_DOMAIN};

static DOT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.+").expect("valid dot-run pattern"));

/// Normalises an email address into its canonical, deduplication-ready form.
///
/// The address is split at the last `@`; the domain is lowercased
/// unconditionally, then matched against the static provider tables to pick
/// the local-part rules and canonical domain. Which rules actually run is
/// controlled by `config`.
///
/// Returns `None` only for invalid input: no `@`, or an empty local-part.
/// Anything else is accepted (including unicode domains and quoted
/// local-parts) and passes through untouched apart from the enabled rules.
pub fn normalise_email(email: &str, config: &Config) -> Option<String> {
    let (local, domain) = address::split_at_last_at(email)?;
    let mut local = local.to_string();
    let mut domain = domain.to_lowercase();

    let provider = providers::resolve(&domain);
    match provider {
        Some(Provider::Gmail) => {
            if config.gmail_remove_subaddress {
                strip_subaddress(&mut local, '+');
            }
            if config.gmail_remove_dots {
                local = remove_isolated_dots(&local);
            }
            if config.gmail_convert_googlemaildotcom {
                domain = GMAIL_CANONICAL_DOMAIN.to_string();
            }
        }
        Some(provider @ (Provider::Icloud | Provider::OutlookDotCom)) => {
            if config.remove_subaddress_for(provider) {
                strip_subaddress(&mut local, '+');
            }
        }
        Some(Provider::Yahoo) => {
            // Yahoo tags use `-`; a `+` in a Yahoo local-part is literal.
            if config.yahoo_remove_subaddress {
                strip_subaddress(&mut local, '-');
            }
        }
        Some(Provider::Yandex) => {
            domain = YANDEX_CANONICAL_DOMAIN.to_string();
        }
        None => {
            trace!(%domain, "domain matches no provider table, local-part passed through");
        }
    }

    let lowercase = match provider {
        Some(provider) => config.all_lowercase || config.lowercase_for(provider),
        None => config.all_lowercase,
    };
    if lowercase {
        local = local.to_lowercase();
    }

    Some(format!("{local}@{domain}"))
}

/// Truncates the local-part at the first occurrence of `separator`, dropping
/// the separator and everything after it.
fn strip_subaddress(local: &mut String, separator: char) {
    if let Some(at) = local.find(separator) {
        local.truncate(at);
    }
}

/// Gmail ignores single dots in local-parts, but runs of two or more
/// consecutive dots are kept verbatim (`a.b` and `ab` collide, `a..b` does
/// not). Each maximal dot run of length one is removed; longer runs survive.
fn remove_isolated_dots(local: &str) -> String {
    DOT_RUNS
        .replace_all(local, |caps: &regex::Captures<'_>| {
            let run = &caps[0];
            if run.len() > 1 {
                run.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::remove_isolated_dots;

    #[test]
    fn removes_single_dots_only() {
        assert_eq!(remove_isolated_dots("some.name"), "somename");
        assert_eq!(remove_isolated_dots("a.b.c.d"), "abcd");
    }

    #[test]
    fn keeps_dot_runs() {
        assert_eq!(remove_isolated_dots("matthew..example"), "matthew..example");
        assert_eq!(remove_isolated_dots("some.name..multiple"), "somename..multiple");
        assert_eq!(
            remove_isolated_dots("some.name.midd..leNa...me..."),
            "somenamemidd..leNa...me..."
        );
    }

    #[test]
    fn leaves_dotless_input_alone() {
        assert_eq!(remove_isolated_dots("plain"), "plain");
        assert_eq!(remove_isolated_dots(""), "");
    }
}
