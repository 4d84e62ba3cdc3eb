//! Fake-data plans for one funnel run.
//!
//! Every value here is transient: generated once per run, written into a
//! form field, and asserted to read back unchanged. The identity pair is
//! shared between signup, the payment name-on-card field and the final
//! assertions, so the whole plan is generated up front and threaded through
//! the scenario.

use chrono::{Datelike, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::internet::en::Password;
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::number::en::NumberWithFormat;
use fake::Fake;

/// The identity fields reused across signup, account page and payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

impl Identity {
    /// Generate a random identity
    #[must_use]
    pub fn random() -> Self {
        Self {
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
        }
    }

    /// The "First Last" form used for the signup name and name-on-card
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Derive the signup email: `{first}.{last}{suffix}@example.com`,
    /// lower-cased. Deterministic given the identity and suffix; the random
    /// suffix is the only collision avoidance there is.
    #[must_use]
    pub fn email_with_suffix(&self, suffix: u16) -> String {
        format!(
            "{}.{}{}@example.com",
            self.first_name, self.last_name, suffix
        )
        .to_lowercase()
    }
}

/// Random email suffix in 1..=9999
#[must_use]
pub fn random_email_suffix() -> u16 {
    (1..10_000).fake()
}

/// Random cart quantity in 1..=20
#[must_use]
pub fn random_quantity() -> u8 {
    (1..21).fake()
}

/// Random free-text order comment
#[must_use]
pub fn random_order_comment() -> String {
    Paragraph(2..4).fake()
}

/// Generated account-details fields for the signup form.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Account password
    pub password: String,
    /// Date of birth: day 1..=31
    pub birth_day: u8,
    /// Date of birth: month 1..=12
    pub birth_month: u8,
    /// Date of birth: year 1900..=2021 (the form's literal upper bound)
    pub birth_year: u16,
    /// Company name
    pub company: String,
    /// Street address
    pub address: String,
    /// State
    pub state: String,
    /// City
    pub city: String,
    /// Zipcode
    pub zipcode: String,
    /// 10-digit mobile number
    pub mobile_number: String,
}

impl Profile {
    /// Generate a random profile
    #[must_use]
    pub fn random() -> Self {
        Self {
            password: Password(10..16).fake(),
            birth_day: (1..32).fake(),
            birth_month: (1..13).fake(),
            birth_year: (1900..2022).fake(),
            company: CompanyName().fake(),
            address: format!(
                "{} {}",
                BuildingNumber().fake::<String>(),
                StreetName().fake::<String>()
            ),
            state: StateName().fake(),
            city: CityName().fake(),
            zipcode: ZipCode().fake(),
            mobile_number: NumberWithFormat("##########").fake(),
        }
    }
}

/// Generated card details for the payment form.
#[derive(Debug, Clone)]
pub struct PaymentCard {
    /// Card number, digits only
    pub number: String,
    /// 3-digit CVC
    pub cvc: String,
    /// Zero-padded two-digit expiry month
    pub expiry_month: String,
    /// Expiry year: current year + 1..=6, recomputed each run
    pub expiry_year: String,
}

impl PaymentCard {
    /// Generate a random non-expired card
    #[must_use]
    pub fn random() -> Self {
        Self::random_for_year(Utc::now().year())
    }

    /// Generate a card whose expiry window is relative to `current_year`
    #[must_use]
    pub fn random_for_year(current_year: i32) -> Self {
        let number: String = CreditCardNumber()
            .fake::<String>()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let offset: i32 = (1..7).fake();
        Self {
            number,
            cvc: NumberWithFormat("###").fake(),
            expiry_month: format!("{:02}", (1..13).fake::<u8>()),
            expiry_year: (current_year + offset).to_string(),
        }
    }
}

/// Everything one journey needs, generated up front so the scenario, the
/// helpers and the final assertions cross-check the same values.
#[derive(Debug, Clone)]
pub struct JourneyPlan {
    /// Identity pair reused verbatim across the funnel
    pub identity: Identity,
    /// Derived signup email
    pub email: String,
    /// Account-details fields
    pub profile: Profile,
    /// Payment card
    pub card: PaymentCard,
    /// Cart quantity in 1..=20
    pub quantity: u8,
    /// Free-text order comment
    pub order_comment: String,
}

impl JourneyPlan {
    /// Generate a complete random plan
    #[must_use]
    pub fn random() -> Self {
        let identity = Identity::random();
        let email = identity.email_with_suffix(random_email_suffix());
        Self {
            identity,
            email,
            profile: Profile::random(),
            card: PaymentCard::random(),
            quantity: random_quantity(),
            order_comment: random_order_comment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_derivation_is_deterministic_and_lowercase() {
        let identity = Identity {
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
        };
        let email = identity.email_with_suffix(1234);
        assert_eq!(email, "ana.diaz1234@example.com");
        assert_eq!(email, identity.email_with_suffix(1234));
    }

    #[test]
    fn test_full_name() {
        let identity = Identity {
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
        };
        assert_eq!(identity.full_name(), "Ana Diaz");
    }

    #[test]
    fn test_quantity_within_bounds() {
        for _ in 0..200 {
            let qty = random_quantity();
            assert!((1..=20).contains(&qty));
        }
    }

    #[test]
    fn test_email_suffix_within_bounds() {
        for _ in 0..200 {
            let suffix = random_email_suffix();
            assert!((1..=9999).contains(&suffix));
        }
    }

    #[test]
    fn test_profile_birth_date_bounds() {
        for _ in 0..100 {
            let profile = Profile::random();
            assert!((1..=31).contains(&profile.birth_day));
            assert!((1..=12).contains(&profile.birth_month));
            assert!((1900..=2021).contains(&profile.birth_year));
            assert_eq!(profile.mobile_number.len(), 10);
            assert!(profile.mobile_number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_card_expiry_window() {
        for _ in 0..100 {
            let card = PaymentCard::random_for_year(2026);
            let year: i32 = card.expiry_year.parse().unwrap();
            assert!(year > 2026);
            assert!(year <= 2032);

            assert_eq!(card.expiry_month.len(), 2);
            let month: u8 = card.expiry_month.parse().unwrap();
            assert!((1..=12).contains(&month));

            assert!(!card.number.is_empty());
            assert!(card.number.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(card.cvc.len(), 3);
        }
    }

    #[test]
    fn test_plan_threads_one_identity() {
        let plan = JourneyPlan::random();
        let lowered = plan.identity.first_name.to_lowercase();
        assert!(plan.email.starts_with(&lowered));
        assert!(plan.email.ends_with("@example.com"));
        assert_eq!(plan.email, plan.email.to_lowercase());
    }
}
