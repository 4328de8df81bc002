//! Parent gate service
//!
//! Guards the parent screens with a four-digit PIN kept in local storage. A
//! first-time parent answers a small addition question before choosing a PIN.

use tracing::{info, warn};

use kidsapp_domain::{DomainError, ParentPin, SetupChallenge};

use crate::ports::outbound::{storage_keys, RandomProvider, StorageProvider};

/// Service for setting and checking the parent PIN
pub struct ParentGateService<S: StorageProvider, R: RandomProvider> {
    storage: S,
    random: R,
}

impl<S: StorageProvider, R: RandomProvider> ParentGateService<S, R> {
    pub fn new(storage: S, random: R) -> Self {
        Self { storage, random }
    }

    /// The stored PIN. A stored value that is not four digits counts as none.
    pub fn stored_pin(&self) -> Option<ParentPin> {
        let raw = self.storage.load(storage_keys::PARENT_PIN)?;
        match ParentPin::new(raw) {
            Ok(pin) => Some(pin),
            Err(_) => {
                warn!("Ignoring malformed stored parent PIN");
                None
            }
        }
    }

    pub fn has_pin(&self) -> bool {
        self.stored_pin().is_some()
    }

    /// Store a new PIN, replacing any previous one.
    pub fn set_pin(&self, input: &str) -> Result<(), DomainError> {
        let pin = ParentPin::new(input)?;
        self.storage.save(storage_keys::PARENT_PIN, pin.as_str());
        info!("Parent PIN set");
        Ok(())
    }

    /// False when no PIN has been set.
    pub fn verify_pin(&self, input: &str) -> bool {
        self.stored_pin().is_some_and(|pin| pin.matches(input))
    }

    pub fn clear_pin(&self) {
        self.storage.remove(storage_keys::PARENT_PIN);
        info!("Parent PIN cleared");
    }

    /// A fresh addition question with operands drawn from the random provider.
    pub fn new_setup_challenge(&self) -> SetupChallenge {
        let (min, max) = SetupChallenge::OPERAND_RANGE;
        let operand = || {
            let value = self.random.random_range(i32::from(min), i32::from(max));
            u8::try_from(value).unwrap_or(min)
        };
        let a = operand();
        let b = operand();
        SetupChallenge::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{InMemoryStorageProvider, ScriptedRandomProvider};

    fn service() -> (
        ParentGateService<InMemoryStorageProvider, ScriptedRandomProvider>,
        InMemoryStorageProvider,
        ScriptedRandomProvider,
    ) {
        let storage = InMemoryStorageProvider::new();
        let random = ScriptedRandomProvider::new();
        (
            ParentGateService::new(storage.clone(), random.clone()),
            storage,
            random,
        )
    }

    #[test]
    fn no_pin_never_verifies() {
        let (gate, _, _) = service();
        assert!(!gate.has_pin());
        assert!(!gate.verify_pin(""));
        assert!(!gate.verify_pin("0000"));
    }

    #[test]
    fn set_and_verify() {
        let (gate, storage, _) = service();
        gate.set_pin("2580").unwrap();

        assert!(gate.has_pin());
        assert!(gate.verify_pin("2580"));
        assert!(!gate.verify_pin("2581"));
        assert_eq!(
            storage.load(storage_keys::PARENT_PIN).as_deref(),
            Some("2580")
        );
    }

    #[test]
    fn invalid_pin_is_rejected_and_keeps_old_one() {
        let (gate, _, _) = service();
        gate.set_pin("1111").unwrap();

        for bad in ["123", "12345", "12a4", " 1234"] {
            assert!(gate.set_pin(bad).is_err(), "{bad}");
        }
        assert!(gate.verify_pin("1111"));
    }

    #[test]
    fn malformed_stored_pin_reads_as_none() {
        let (gate, storage, _) = service();
        storage.save(storage_keys::PARENT_PIN, "12");

        assert!(!gate.has_pin());
        assert!(!gate.verify_pin("12"));
    }

    #[test]
    fn clear_removes_pin() {
        let (gate, _, _) = service();
        gate.set_pin("4321").unwrap();
        gate.clear_pin();

        assert!(!gate.has_pin());
    }

    #[test]
    fn setup_challenge_uses_random_operands() {
        let (gate, _, random) = service();
        random.push_all([3, 8]);

        let challenge = gate.new_setup_challenge();

        assert_eq!((challenge.a, challenge.b), (3, 8));
        assert_eq!(challenge.question(), "Vad är 3 + 8?");
        assert!(challenge.check(" 11 "));
        assert!(!challenge.check("12"));
    }

    #[test]
    fn setup_challenge_operands_stay_in_range() {
        let (gate, _, random) = service();
        random.push_all([-5, 40]);

        let challenge = gate.new_setup_challenge();

        assert_eq!((challenge.a, challenge.b), (1, 9));
    }
}
