//! Property tests for app names and public URLs.

use proptest::prelude::*;

use dashctl::domain::entities::Checkout;
use dashctl::domain::value_objects::validate_app_name;
use dashctl::DeployUrl;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A name derived from any directory is a valid hostname label.
    #[test]
    fn property_derived_app_name_is_valid(dir in "[A-Za-z0-9 _.-]{1,80}") {
        let checkout = Checkout::new(std::path::Path::new("/srv").join(&dir));
        if let Some(name) = checkout.app_name_hint() {
            prop_assert_eq!(validate_app_name(&name), Ok(()));
        }
    }

    /// PROPERTY: A URL built from a valid name is found again in command output.
    #[test]
    fn property_url_is_found_in_output(
        app in "[a-z][a-z0-9-]{0,20}[a-z0-9]",
        noise in "[a-zA-Z ]{0,20}",
    ) {
        let url = DeployUrl::new(&app, "fly.dev").unwrap();
        let output = format!("{} Visit your app at {} now", noise, url);
        prop_assert_eq!(DeployUrl::find_in(&output, "fly.dev"), Some(url));
    }
}
