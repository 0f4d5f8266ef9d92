//! # Operation Catalog
//!
//! The fixed menu of array operations and the code example shown next to
//! each one.

use std::fmt;

/// One of the five animated array operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Access,
    Insert,
    Remove,
    Iterate,
    Search,
}

impl Operation {
    pub fn name(self) -> &'static str {
        self.record().name
    }

    pub fn code(self) -> &'static str {
        self.record().code
    }

    pub fn record(self) -> &'static OperationRecord {
        // CATALOG is declared in enum order
        &CATALOG[self as usize]
    }

    /// Look up an operation by its display name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .map(|r| r.operation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable (name, example code) pair.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationRecord {
    pub operation: Operation,
    pub name: &'static str,
    pub code: &'static str,
}

/// All operations, in menu order.
pub fn catalog() -> &'static [OperationRecord] {
    &CATALOG
}

static CATALOG: [OperationRecord; 5] = [
    OperationRecord {
        operation: Operation::Access,
        name: "Access",
        code: "let value = array[index]; // O(1)",
    },
    OperationRecord {
        operation: Operation::Insert,
        name: "Insert",
        code: "array.insert(index, value); // O(n)",
    },
    OperationRecord {
        operation: Operation::Remove,
        name: "Remove",
        code: "let removed = array.remove(index); // O(n)",
    },
    OperationRecord {
        operation: Operation::Iterate,
        name: "Iterate",
        code: "for value in &array {\n    println!(\"{value}\");\n} // O(n)",
    },
    OperationRecord {
        operation: Operation::Search,
        name: "Search",
        code: "let found = array.iter().position(|&v| v == target); // O(n)",
    },
];
