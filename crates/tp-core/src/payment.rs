//! Payment method chosen by each vehicle on arrival.

/// How a vehicle pays at the booth.
///
/// Automatic booths only read electronic tags; manual booths take both.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Electronic toll tag / e-money card.
    Electronic,
    /// Cash handed to an attendant.
    Cash,
}

impl PaymentMethod {
    /// Human-readable label, used in event text and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Electronic => "electronic",
            PaymentMethod::Cash       => "cash",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
