//! The Card entity.
//!
//! A [`Card`] holds the raw input fields (number, CVC, expiration) together
//! with the attributes the payments API reports for a saved card. Whenever an
//! input field changes, the card re-classifies the brand and recomputes its
//! cached [`Validity`] flags. Listeners registered with [`Card::subscribe`]
//! receive a [`CardEvent`] for every value that actually changed.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use std::sync::{Arc, Mutex};
//! use stripe_card::card::{Card, CardEvent, FixedClock};
//! use stripe_card::CardBrand;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let mut card = Card::with_clock(FixedClock(today));
//!
//! let events = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&events);
//! card.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
//!
//! card.set_number("4242424242424242");
//! card.set_cvc("123");
//! card.set_expiration_month(12);
//! card.set_expiration_year(30);
//!
//! assert_eq!(card.brand(), CardBrand::Visa);
//! assert!(card.is_valid_card());
//! assert!(events.lock().unwrap().contains(&CardEvent::BrandChanged(CardBrand::Visa)));
//! ```

use chrono::NaiveDate;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroizing;

use crate::detect::classify;
use crate::error::ValidationError;
use crate::expiry::{self, ExpirationDate};
use crate::mask::{mask_cvc, mask_number};
use crate::validate::{validate_card, CardFields, Validity};
use crate::wire::{CvcCheck, FundingType, TokenizationMethod};
use crate::CardBrand;

/// Source of the current date for expiration checks.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        expiry::today()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// One of the cached validity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityFlag {
    /// Number, CVC and date are all valid.
    Card,
    /// Number passes Luhn and has the right length.
    CardNumber,
    /// Number has the right length for its brand.
    CardLength,
    /// Month is between 1 and 12.
    ExpirationMonth,
    /// Year is this year or later.
    ExpirationYear,
    /// Expiration date has not passed.
    ExpirationDate,
    /// CVC is valid for the brand.
    Cvc,
}

impl ValidityFlag {
    const ALL: [ValidityFlag; 7] = [
        ValidityFlag::CardNumber,
        ValidityFlag::CardLength,
        ValidityFlag::ExpirationMonth,
        ValidityFlag::ExpirationYear,
        ValidityFlag::ExpirationDate,
        ValidityFlag::Cvc,
        ValidityFlag::Card,
    ];

    fn get(self, validity: &Validity) -> bool {
        match self {
            Self::Card => validity.card,
            Self::CardNumber => validity.card_number,
            Self::CardLength => validity.card_length,
            Self::ExpirationMonth => validity.expiration_month,
            Self::ExpirationYear => validity.expiration_year,
            Self::ExpirationDate => validity.expiration_date,
            Self::Cvc => validity.cvc,
        }
    }
}

/// A change notification from a [`Card`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    /// The API identifier changed.
    CardIdChanged,
    /// The cardholder name changed.
    NameChanged,
    /// The issuing country changed.
    CountryChanged,
    /// The currency changed.
    CurrencyChanged,
    /// The fingerprint changed.
    FingerprintChanged,
    /// The reported last four digits changed.
    LastFourDigitsChanged,
    /// The funding type changed.
    FundingChanged,
    /// The CVC check result changed.
    CvcCheckChanged,
    /// The tokenization method changed.
    TokenizationMethodChanged,
    /// The card number changed.
    NumberChanged,
    /// The CVC changed.
    CvcChanged,
    /// The expiration month changed.
    ExpirationMonthChanged,
    /// The expiration year changed.
    ExpirationYearChanged,
    /// The brand changed to the given value.
    BrandChanged(CardBrand),
    /// A cached validity flag flipped.
    ValidityChanged {
        /// Which flag.
        flag: ValidityFlag,
        /// Its new value.
        valid: bool,
    },
}

type Listener = Box<dyn FnMut(&CardEvent) + Send + Sync>;

/// A payment card with cached validation state.
///
/// The number and CVC are wiped from memory when replaced or dropped.
pub struct Card {
    card_id: String,
    name: String,
    country: String,
    currency: String,
    fingerprint: String,
    last_four_digits: String,
    funding: FundingType,
    cvc_check: CvcCheck,
    tokenization_method: TokenizationMethod,

    number: Zeroizing<String>,
    cvc: Zeroizing<String>,
    expiration_month: i32,
    expiration_year: i32,
    brand: CardBrand,

    validity: Validity,
    clock: Arc<dyn Clock>,
    listeners: Vec<Listener>,
}

/// Stores `value` in `slot`, returning true if it differed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl Card {
    /// Creates an empty card that reads the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty card with the given date source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_shared_clock(Arc::new(clock))
    }

    /// Creates an empty card sharing a date source with other cards.
    pub fn with_shared_clock(clock: Arc<dyn Clock>) -> Self {
        let mut card = Self {
            card_id: String::new(),
            name: String::new(),
            country: String::new(),
            currency: String::new(),
            fingerprint: String::new(),
            last_four_digits: String::new(),
            funding: FundingType::Unknown,
            cvc_check: CvcCheck::Unknown,
            tokenization_method: TokenizationMethod::Unknown,
            number: Zeroizing::new(String::new()),
            cvc: Zeroizing::new(String::new()),
            expiration_month: 0,
            expiration_year: 0,
            brand: CardBrand::Unknown,
            validity: Validity::default(),
            clock,
            listeners: Vec::new(),
        };
        card.validity = Validity::evaluate(&card.fields(), card.clock.today());
        card
    }

    /// Registers a listener for change events.
    pub fn subscribe(&mut self, listener: impl FnMut(&CardEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the fields used for validation.
    pub fn fields(&self) -> CardFields<'_> {
        CardFields {
            number: &self.number,
            cvc: &self.cvc,
            expiration_month: self.expiration_month,
            expiration_year: self.expiration_year,
            brand: self.brand,
        }
    }

    // ---- validated input fields ----

    /// Returns the card number.
    ///
    /// Never log this value; use [`Card::masked_number`] instead.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Sets the card number, re-detects the brand and revalidates.
    pub fn set_number(&mut self, number: impl Into<String>) {
        let number = number.into();
        if *self.number == number {
            return;
        }
        self.number = Zeroizing::new(number);
        self.emit(CardEvent::NumberChanged);

        let brand = classify(&self.number);
        self.update_brand(brand);
        self.revalidate();
    }

    /// Returns the CVC.
    pub fn cvc(&self) -> &str {
        &self.cvc
    }

    /// Sets the CVC and revalidates.
    pub fn set_cvc(&mut self, cvc: impl Into<String>) {
        let cvc = cvc.into();
        if *self.cvc == cvc {
            return;
        }
        self.cvc = Zeroizing::new(cvc);
        self.emit(CardEvent::CvcChanged);
        self.revalidate();
    }

    /// Returns the expiration month as given.
    pub fn expiration_month(&self) -> i32 {
        self.expiration_month
    }

    /// Sets the expiration month and revalidates.
    pub fn set_expiration_month(&mut self, month: i32) {
        if replace(&mut self.expiration_month, month) {
            self.emit(CardEvent::ExpirationMonthChanged);
            self.revalidate();
        }
    }

    /// Returns the expiration year as given (two or four digits).
    pub fn expiration_year(&self) -> i32 {
        self.expiration_year
    }

    /// Sets the expiration year and revalidates.
    pub fn set_expiration_year(&mut self, year: i32) {
        if replace(&mut self.expiration_year, year) {
            self.emit(CardEvent::ExpirationYearChanged);
            self.revalidate();
        }
    }

    /// Returns the card brand.
    pub fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Overrides the brand, e.g. with the value from a server record.
    ///
    /// The override holds until the number changes.
    pub fn set_brand(&mut self, brand: CardBrand) {
        if brand != self.brand {
            self.update_brand(brand);
            self.revalidate();
        }
    }

    /// Returns the brand detected from the current number, ignoring overrides.
    pub fn possible_brand(&self) -> CardBrand {
        classify(&self.number)
    }

    // ---- cached validity ----

    /// Recomputes the cached validity flags.
    ///
    /// Setters call this automatically. Call it directly when the date may
    /// have moved on, e.g. for a long-lived card across a month boundary.
    pub fn revalidate(&mut self) {
        let today = self.clock.today();
        let validity = Validity::evaluate(&self.fields(), today);
        let previous = std::mem::replace(&mut self.validity, validity);

        tracing::trace!(
            number = %mask_number(&self.number),
            brand = %self.brand,
            ?validity,
            "card revalidated"
        );

        for flag in ValidityFlag::ALL {
            let valid = flag.get(&validity);
            if flag.get(&previous) != valid {
                self.emit(CardEvent::ValidityChanged { flag, valid });
            }
        }
    }

    /// Returns all cached validity flags.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Returns true if number, CVC and expiration date are all valid.
    pub fn is_valid_card(&self) -> bool {
        self.validity.card
    }

    /// Returns true if the number passes Luhn and has the brand's length.
    pub fn is_valid_card_number(&self) -> bool {
        self.validity.card_number
    }

    /// Returns true if the number has the brand's length.
    pub fn is_valid_card_length(&self) -> bool {
        self.validity.card_length
    }

    /// Returns true if the expiration month is between 1 and 12.
    pub fn is_valid_expiration_month(&self) -> bool {
        self.validity.expiration_month
    }

    /// Returns true if the expiration year is this year or later.
    pub fn is_valid_expiration_year(&self) -> bool {
        self.validity.expiration_year
    }

    /// Returns true if the expiration date has not passed.
    pub fn is_valid_expiration_date(&self) -> bool {
        self.validity.expiration_date
    }

    /// Returns true if the CVC is valid for the brand.
    pub fn is_valid_cvc(&self) -> bool {
        self.validity.cvc
    }

    /// Validates the card and reports the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_card(&self.fields(), self.clock.today())
    }

    /// Returns the normalized expiration date, if it is valid.
    pub fn expiration_date(&self) -> Option<ExpirationDate> {
        expiry::validate_expiration(self.expiration_month, self.expiration_year, self.clock.today())
            .ok()
    }

    /// Returns the number masked down to its last four digits.
    pub fn masked_number(&self) -> String {
        mask_number(&self.number)
    }

    // ---- reported attributes ----

    /// Returns the API identifier of the card.
    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    /// Sets the API identifier.
    pub fn set_card_id(&mut self, id: impl Into<String>) {
        if replace(&mut self.card_id, id.into()) {
            self.emit(CardEvent::CardIdChanged);
        }
    }

    /// Returns the cardholder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the cardholder name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if replace(&mut self.name, name.into()) {
            self.emit(CardEvent::NameChanged);
        }
    }

    /// Returns the issuing country.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Sets the issuing country.
    pub fn set_country(&mut self, country: impl Into<String>) {
        if replace(&mut self.country, country.into()) {
            self.emit(CardEvent::CountryChanged);
        }
    }

    /// Returns the currency.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Sets the currency.
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        if replace(&mut self.currency, currency.into()) {
            self.emit(CardEvent::CurrencyChanged);
        }
    }

    /// Returns the fingerprint reported by the API.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Sets the fingerprint.
    pub fn set_fingerprint(&mut self, fingerprint: impl Into<String>) {
        if replace(&mut self.fingerprint, fingerprint.into()) {
            self.emit(CardEvent::FingerprintChanged);
        }
    }

    /// Returns the last four digits reported by the API.
    pub fn last_four_digits(&self) -> &str {
        &self.last_four_digits
    }

    /// Sets the reported last four digits.
    pub fn set_last_four_digits(&mut self, digits: impl Into<String>) {
        if replace(&mut self.last_four_digits, digits.into()) {
            self.emit(CardEvent::LastFourDigitsChanged);
        }
    }

    /// Returns the funding type.
    pub fn funding(&self) -> FundingType {
        self.funding
    }

    /// Sets the funding type.
    pub fn set_funding(&mut self, funding: FundingType) {
        if replace(&mut self.funding, funding) {
            self.emit(CardEvent::FundingChanged);
        }
    }

    /// Returns the issuer's CVC check result.
    pub fn cvc_check(&self) -> CvcCheck {
        self.cvc_check
    }

    /// Sets the CVC check result.
    pub fn set_cvc_check(&mut self, check: CvcCheck) {
        if replace(&mut self.cvc_check, check) {
            self.emit(CardEvent::CvcCheckChanged);
        }
    }

    /// Returns the tokenization method.
    pub fn tokenization_method(&self) -> TokenizationMethod {
        self.tokenization_method
    }

    /// Sets the tokenization method.
    pub fn set_tokenization_method(&mut self, method: TokenizationMethod) {
        if replace(&mut self.tokenization_method, method) {
            self.emit(CardEvent::TokenizationMethodChanged);
        }
    }

    fn update_brand(&mut self, brand: CardBrand) {
        if self.brand == brand {
            return;
        }

        tracing::debug!(
            from = %self.brand,
            to = %brand,
            number = %mask_number(&self.number),
            "card brand changed"
        );
        self.brand = brand;
        self.emit(CardEvent::BrandChanged(brand));
    }

    fn emit(&mut self, event: CardEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("card_id", &self.card_id)
            .field("brand", &self.brand)
            .field("number", &mask_number(&self.number))
            .field("cvc", &mask_cvc(&self.cvc))
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("validity", &self.validity)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
