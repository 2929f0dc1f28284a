use std::str::FromStr;

use thiserror::Error;

/// Who is speaking. Sellers maintain the catalog; buyers query it and place
/// orders. The same sentence can route differently per role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Seller,
    Buyer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::Buyer => "buyer",
        }
    }
}

#[derive(Debug, Error)]
#[error("unsupported role `{0}` (expected seller|buyer)")]
pub struct RoleParseError(String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "seller" => Ok(Self::Seller),
            "buyer" => Ok(Self::Buyer),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Add,
    Remove,
    AssignQuantity,
    ChangePrice,
    Search,
    PlaceOrder,
}

pub struct IntentRule {
    pub role: Role,
    pub phrase: &'static str,
    pub intent: Intent,
}

/// Ordered routing table. Earlier rows shadow later ones, which is how
/// "search recorder" stays a search even though it contains "order".
/// The assign row fires on the spoken "no.of items" phrasing; the guidance
/// sentences advertise "assign quantity", and the row here is what counts.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule { role: Role::Seller, phrase: "add", intent: Intent::Add },
    IntentRule { role: Role::Seller, phrase: "remove", intent: Intent::Remove },
    IntentRule { role: Role::Seller, phrase: "assign no.of items", intent: Intent::AssignQuantity },
    IntentRule { role: Role::Seller, phrase: "change price of", intent: Intent::ChangePrice },
    IntentRule { role: Role::Buyer, phrase: "search", intent: Intent::Search },
    IntentRule { role: Role::Buyer, phrase: "place order", intent: Intent::PlaceOrder },
    IntentRule { role: Role::Buyer, phrase: "order", intent: Intent::PlaceOrder },
];

/// First rule whose role matches and whose phrase occurs anywhere in the
/// command wins. Containment is substring-level on purpose: "add" inside
/// another word still routes to Add.
pub fn classify(role: Role, command: &str) -> Option<Intent> {
    INTENT_RULES
        .iter()
        .find(|rule| rule.role == role && command.contains(rule.phrase))
        .map(|rule| rule.intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!("seller".parse::<Role>().ok(), Some(Role::Seller));
        assert_eq!(" Buyer ".parse::<Role>().ok(), Some(Role::Buyer));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn routing_follows_the_table_order() {
        struct Case {
            role: Role,
            command: &'static str,
            expected: Option<Intent>,
        }

        let cases = vec![
            Case {
                role: Role::Seller,
                command: "add 5 cotton saree for 500",
                expected: Some(Intent::Add),
            },
            Case { role: Role::Seller, command: "remove rice bag", expected: Some(Intent::Remove) },
            Case {
                role: Role::Seller,
                command: "assign no.of items 5 to rice bag",
                expected: Some(Intent::AssignQuantity),
            },
            Case {
                role: Role::Seller,
                command: "change price of rice bag to 350",
                expected: Some(Intent::ChangePrice),
            },
            Case { role: Role::Buyer, command: "search saree", expected: Some(Intent::Search) },
            Case {
                role: Role::Buyer,
                command: "place order 2 rice bag",
                expected: Some(Intent::PlaceOrder),
            },
            Case {
                role: Role::Buyer,
                command: "order 2 rice bag",
                expected: Some(Intent::PlaceOrder),
            },
            // "search" outranks the bare "order" inside "recorder".
            Case { role: Role::Buyer, command: "search recorder", expected: Some(Intent::Search) },
            // No "search" here, so the embedded "order" routes the command.
            Case {
                role: Role::Buyer,
                command: "show me the recorder",
                expected: Some(Intent::PlaceOrder),
            },
            // Substring routing: "add" hides inside "madden".
            Case {
                role: Role::Seller,
                command: "madden the crowd for 10",
                expected: Some(Intent::Add),
            },
            // The guidance wording does not route; only the table phrase does.
            Case {
                role: Role::Seller,
                command: "assign quantity 5 to rice bag",
                expected: None,
            },
            // Roles gate the rules.
            Case { role: Role::Buyer, command: "remove rice bag", expected: None },
            Case { role: Role::Seller, command: "search saree", expected: None },
            Case { role: Role::Seller, command: "hello there", expected: None },
        ];

        for (index, case) in cases.iter().enumerate() {
            assert_eq!(
                classify(case.role, case.command),
                case.expected,
                "case {index}: {:?} `{}`",
                case.role,
                case.command
            );
        }
    }
}
