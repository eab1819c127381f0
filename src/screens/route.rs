use super::Destination;
use crate::data::Specialty;

/// Subject selection comes first; after that, signed-in users go home and
/// everyone else to login.
pub fn route(selected: Option<&Specialty>, logged_in: bool) -> Destination {
    match selected {
        Some(choice) if choice.is_selected() => {
            if logged_in {
                Destination::Home
            } else {
                Destination::Login
            }
        }
        _ => Destination::Subject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_goes_to_subject_regardless_of_login() {
        assert_eq!(route(None, false), Destination::Subject);
        assert_eq!(route(None, true), Destination::Subject);

        let blank = Specialty::new("", "");
        assert_eq!(route(Some(&blank), true), Destination::Subject);
    }

    #[test]
    fn selection_splits_on_login() {
        let s1 = Specialty::new("S1", "Mathematics");
        assert_eq!(route(Some(&s1), true), Destination::Home);
        assert_eq!(route(Some(&s1), false), Destination::Login);
    }
}
