//! Fixture entity types: a supplier graph with to-one, to-many, and
//! junction relationships, plus a cyclic pair and a misdeclared junction.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use uuid::Uuid;

use rowpress_core::{
    ColumnRef, Entity, EntityRef, EnumValue, JunctionColumn, JunctionTable, Related, Relationship,
    Value,
};

pub const SUPPLIER_ID: &str = "2b7e7211-d2c7-4eb4-8c14-05ed58c77473";
pub const SUPPLIER_B_ID: &str = "330b18d4-5b92-49e5-b899-394dafd19e95";
pub const SUPPLIER_C_ID: &str = "ca8e7bb6-898f-47d4-98f8-e5b560ed364e";
pub const ADDRESS_ID: &str = "c5fb851f-63fd-4572-872c-3597186c9afe";
pub const CONTACT_ADDRESS_ID: &str = "cd521f7e-df61-4079-b44d-35015b9b5110";
pub const BANK_DETAILS_ID: &str = "ccd390cf-a74c-4897-a923-3d77ce1b97bf";
pub const CATEGORY_BAKED_ID: &str = "3674c73c-a967-493f-9a4b-5b70f78a5a99";
pub const CATEGORY_ISP_ID: &str = "f66c3eb7-7b93-4d9f-bc66-8ff07353f5e7";
pub const CONTACT_ID: &str = "98a11210-949a-48ad-99c7-1d89c54c2a53";

pub const SUPPLIER_CATEGORY: JunctionTable = JunctionTable::new(
    "supplier_category",
    &[
        JunctionColumn::new("supplier_id", ColumnRef::new("supplier", "id")),
        JunctionColumn::new("category_id", ColumnRef::new("category", "id")),
    ],
);

/// Junction whose first column references a table that is neither side of
/// the relationship.
pub const BROKEN_JUNCTION: JunctionTable = JunctionTable::new(
    "supplier_category",
    &[
        JunctionColumn::new("supplier_id", ColumnRef::new("warehouse", "id")),
        JunctionColumn::new("category_id", ColumnRef::new("category", "id")),
    ],
);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn uid(text: &str) -> Uuid {
    Uuid::parse_str(text).expect("fixture uuid")
}

#[derive(Debug, Clone, Copy)]
pub enum AccountType {
    Cash,
    Credit,
}

impl AccountType {
    pub fn as_value(self) -> Value {
        match self {
            Self::Cash => Value::Enum(EnumValue::new("CASH", Value::from("cash"))),
            Self::Credit => Value::Enum(EnumValue::new("CREDIT", Value::from("credit"))),
        }
    }
}

pub struct Address {
    pub id: Uuid,
    pub line_1: String,
}

impl Entity for Address {
    fn table(&self) -> &'static str {
        "address"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("line_1", Value::from(self.line_1.clone())),
            ("id", Value::from(self.id)),
        ]
    }
}

pub struct BankDetails {
    pub id: Uuid,
    pub account_number: String,
    pub account_type: AccountType,
}

impl Entity for BankDetails {
    fn table(&self) -> &'static str {
        "bank_details"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("account_number", Value::from(self.account_number.clone())),
            ("account_type", self.account_type.as_value()),
            ("id", Value::from(self.id)),
        ]
    }
}

pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Entity for Category {
    fn table(&self) -> &'static str {
        "category"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::from(self.name.clone())),
            ("id", Value::from(self.id)),
        ]
    }
}

pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub address_id: Uuid,
    pub supplier_id: Uuid,
    pub address: EntityRef,
}

impl Entity for Contact {
    fn table(&self) -> &'static str {
        "contact"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("name", Value::from(self.name.clone())),
            ("email", Value::from(self.email.clone())),
            ("address_id", Value::from(self.address_id)),
            ("supplier_id", Value::from(self.supplier_id)),
            ("id", Value::from(self.id)),
        ]
    }

    fn relationships(&self) -> Vec<Relationship> {
        vec![Relationship::new(
            "address",
            Related::One(Some(self.address.clone())),
        )]
    }
}

#[derive(Default)]
pub struct Supplier {
    pub id: Uuid,
    pub created_at: Option<chrono::NaiveDateTime>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub address_id: Option<Uuid>,
    pub bank_details_id: Option<Uuid>,
    pub address: Option<EntityRef>,
    pub bank_details: Option<EntityRef>,
    pub categories: Vec<EntityRef>,
    pub contacts: Vec<EntityRef>,
}

impl Entity for Supplier {
    fn table(&self) -> &'static str {
        "supplier"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("created_at", Value::from(self.created_at)),
            ("email", Value::from(self.email.clone())),
            ("name", Value::from(self.name.clone())),
            ("address_id", Value::from(self.address_id)),
            ("bank_details_id", Value::from(self.bank_details_id)),
            ("id", Value::from(self.id)),
        ]
    }

    fn relationships(&self) -> Vec<Relationship> {
        vec![
            Relationship::new("address", Related::One(self.address.clone())),
            Relationship::new("bank_details", Related::One(self.bank_details.clone())),
            Relationship::new(
                "categories",
                Related::ManyVia {
                    junction: SUPPLIER_CATEGORY,
                    entities: self.categories.clone(),
                },
            ),
            Relationship::new("contacts", Related::Many(self.contacts.clone())),
        ]
    }
}

/// Owner whose junction descriptor references a foreign table that is
/// neither side of the relationship.
pub struct MisdeclaredOwner {
    pub id: Uuid,
    pub categories: Vec<EntityRef>,
}

impl Entity for MisdeclaredOwner {
    fn table(&self) -> &'static str {
        "supplier"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![("id", Value::from(self.id))]
    }

    fn relationships(&self) -> Vec<Relationship> {
        vec![Relationship::new(
            "categories",
            Related::ManyVia {
                junction: BROKEN_JUNCTION,
                entities: self.categories.clone(),
            },
        )]
    }
}

/// Minimal entity for cycle tests; `peer` is filled in after construction.
pub struct Node {
    pub id: Uuid,
    pub label: String,
    pub peer: RefCell<Option<EntityRef>>,
}

impl Entity for Node {
    fn table(&self) -> &'static str {
        "node"
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("label", Value::from(self.label.clone())),
            ("id", Value::from(self.id)),
        ]
    }

    fn relationships(&self) -> Vec<Relationship> {
        vec![Relationship::new(
            "peer",
            Related::One(self.peer.borrow().clone()),
        )]
    }
}

pub fn categories() -> Vec<EntityRef> {
    vec![
        Rc::new(Category {
            id: uid(CATEGORY_BAKED_ID),
            name: "Baked goods".to_string(),
        }),
        Rc::new(Category {
            id: uid(CATEGORY_ISP_ID),
            name: "ISP".to_string(),
        }),
    ]
}

/// The nested supplier graph from the reference dataset: one address and
/// bank account, two categories via the junction, and a contact holding a
/// second address.
pub fn supplier() -> EntityRef {
    let contact_address: EntityRef = Rc::new(Address {
        id: uid(CONTACT_ADDRESS_ID),
        line_1: "The imperial road".to_string(),
    });
    Rc::new(Supplier {
        id: uid(SUPPLIER_ID),
        created_at: NaiveDate::from_ymd_opt(2020, 2, 21)
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        email: Some("info@loros.example".to_string()),
        name: Some("Loros Grist".to_string()),
        address_id: Some(uid(ADDRESS_ID)),
        bank_details_id: Some(uid(BANK_DETAILS_ID)),
        address: Some(Rc::new(Address {
            id: uid(ADDRESS_ID),
            line_1: "Celestia".to_string(),
        })),
        bank_details: Some(Rc::new(BankDetails {
            id: uid(BANK_DETAILS_ID),
            account_number: "payusnothing".to_string(),
            account_type: AccountType::Cash,
        })),
        categories: categories(),
        contacts: vec![Rc::new(Contact {
            id: uid(CONTACT_ID),
            name: "Sveimann Glort".to_string(),
            email: Some("sveimann@loros.example".to_string()),
            address_id: uid(CONTACT_ADDRESS_ID),
            supplier_id: uid(SUPPLIER_ID),
            address: contact_address,
        })],
    })
}

/// Two bare suppliers sharing the same two category instances.
pub fn supplier_pair() -> Vec<EntityRef> {
    let shared = categories();
    vec![
        Rc::new(Supplier {
            id: uid(SUPPLIER_B_ID),
            categories: shared.clone(),
            ..Supplier::default()
        }),
        Rc::new(Supplier {
            id: uid(SUPPLIER_C_ID),
            categories: shared,
            ..Supplier::default()
        }),
    ]
}
