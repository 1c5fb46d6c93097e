/// Splits an address at its last `@` into local-part and domain.
///
/// Returns `None` when there is no `@` or the local-part is empty; those are
/// the only invalid inputs. The last `@` is used so quoted local-parts such
/// as `"foo@bar"@baz.com` split correctly. An empty domain is accepted here
/// and simply matches no provider downstream.
pub(crate) fn split_at_last_at(email: &str) -> Option<(&str, &str)> {
    let at = email.rfind('@')?;
    let local = &email[..at];
    if local.is_empty() {
        return None;
    }
    Some((local, &email[at + 1..]))
}

#[cfg(test)]
mod tests {
    use super::split_at_last_at;

    #[test]
    fn splits_on_last_at() {
        assert_eq!(
            split_at_last_at("\"foo@bar\"@baz.com"),
            Some(("\"foo@bar\"", "baz.com"))
        );
        assert_eq!(split_at_last_at("a@b.com"), Some(("a", "b.com")));
    }

    #[test]
    fn rejects_missing_at() {
        assert_eq!(split_at_last_at("no-at-sign"), None);
        assert_eq!(split_at_last_at(""), None);
    }

    #[test]
    fn rejects_empty_local_part() {
        assert_eq!(split_at_last_at("@gmail.com"), None);
    }

    #[test]
    fn accepts_empty_domain() {
        assert_eq!(split_at_last_at("foo@"), Some(("foo", "")));
    }
}
