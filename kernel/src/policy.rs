use error_stack::Report;
use vodca::References;

use crate::entity::{
    MspId, TextbookAuthor, TextbookPatch, TextbookPrice, TextbookTitle, TextbookYear,
};
use crate::KernelError;

pub const MANUFACTURER_MSP_ID: &str = "manufacturer-textbook-com";
pub const DEALER_MSP_ID: &str = "dealer-textbook-com";

/// Organizations recognized by the textbook contract.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Role {
    Manufacturer,
    Dealer,
}

impl Role {
    pub fn can_create(&self) -> bool {
        match self {
            Role::Manufacturer => true,
            Role::Dealer => false,
        }
    }

    pub fn can_delete(&self) -> bool {
        match self {
            Role::Manufacturer => true,
            Role::Dealer => false,
        }
    }

    /// Both roles may update, scoped by [`Role::patch`].
    pub fn can_update(&self) -> bool {
        match self {
            Role::Manufacturer => true,
            Role::Dealer => true,
        }
    }

    /// Narrows a full update request down to the fields this role may change.
    pub fn patch(
        &self,
        title: TextbookTitle,
        author: TextbookAuthor,
        year: TextbookYear,
        price: TextbookPrice,
    ) -> TextbookPatch {
        match self {
            Role::Manufacturer => TextbookPatch::all(title, author, year, price),
            Role::Dealer => TextbookPatch::price_only(price),
        }
    }
}

/// Maps MSP ids onto [`Role`]s. The two ids are always distinct.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct RoleRegistry {
    manufacturer: MspId,
    dealer: MspId,
}

impl RoleRegistry {
    pub fn new(manufacturer: MspId, dealer: MspId) -> error_stack::Result<Self, KernelError> {
        if manufacturer == dealer {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "manufacturer and dealer share the same MSPID: {manufacturer}"
            )));
        }
        Ok(Self {
            manufacturer,
            dealer,
        })
    }

    pub fn role_of(&self, msp_id: &MspId) -> Option<Role> {
        if msp_id == &self.manufacturer {
            Some(Role::Manufacturer)
        } else if msp_id == &self.dealer {
            Some(Role::Dealer)
        } else {
            None
        }
    }

    /// Like [`RoleRegistry::role_of`] but rejects unknown organizations.
    pub fn resolve(&self, msp_id: &MspId) -> error_stack::Result<Role, KernelError> {
        self.role_of(msp_id).ok_or_else(|| unauthorized(msp_id))
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self {
            manufacturer: MspId::new(MANUFACTURER_MSP_ID),
            dealer: MspId::new(DEALER_MSP_ID),
        }
    }
}

pub fn unauthorized(msp_id: &MspId) -> Report<KernelError> {
    Report::new(KernelError::Unauthorized).attach_printable(format!(
        "user under following MSPID: {msp_id} can't perform this action"
    ))
}

pub trait DependOnRoleRegistry: 'static + Sync + Send {
    fn role_registry(&self) -> &RoleRegistry;
}

#[cfg(test)]
mod test {
    use crate::entity::{MspId, TextbookAuthor, TextbookPrice, TextbookTitle, TextbookYear};
    use crate::policy::{Role, RoleRegistry};
    use crate::KernelError;

    #[test]
    fn default_registry_resolves_known_organizations() {
        let registry = RoleRegistry::default();
        assert_eq!(
            registry.role_of(&MspId::new("manufacturer-textbook-com")),
            Some(Role::Manufacturer)
        );
        assert_eq!(
            registry.role_of(&MspId::new("dealer-textbook-com")),
            Some(Role::Dealer)
        );
        assert_eq!(registry.role_of(&MspId::new("retailer-textbook-com")), None);
        assert_eq!(registry.role_of(&MspId::new("")), None);
    }

    #[test]
    fn unknown_organization_is_unauthorized() {
        let registry = RoleRegistry::default();
        let report = registry.resolve(&MspId::new("student-org")).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Unauthorized);
    }

    #[test]
    fn registry_rejects_shared_id() {
        let report = RoleRegistry::new(MspId::new("org"), MspId::new("org")).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);
    }

    #[test]
    fn only_manufacturer_creates_and_deletes() {
        assert!(Role::Manufacturer.can_create());
        assert!(Role::Manufacturer.can_delete());
        assert!(!Role::Dealer.can_create());
        assert!(!Role::Dealer.can_delete());
        assert!(Role::Manufacturer.can_update());
        assert!(Role::Dealer.can_update());
    }

    #[test]
    fn dealer_patch_carries_price_only() {
        let patch = Role::Dealer.patch(
            TextbookTitle::new("Hacked"),
            TextbookAuthor::new("Mallory"),
            TextbookYear::new("1999"),
            TextbookPrice::new("55"),
        );
        assert!(patch.touches_price());
        assert!(!patch.touches_title());
        assert!(!patch.touches_author());
        assert!(!patch.touches_year());
    }

    #[test]
    fn manufacturer_patch_carries_every_mutable_field() {
        let patch = Role::Manufacturer.patch(
            TextbookTitle::new("T"),
            TextbookAuthor::new("A"),
            TextbookYear::new("2024"),
            TextbookPrice::new("10"),
        );
        assert!(patch.touches_title());
        assert!(patch.touches_author());
        assert!(patch.touches_year());
        assert!(patch.touches_price());
    }
}
