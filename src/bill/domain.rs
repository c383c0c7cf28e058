//! Core bill domain types.

use serde::{Deserialize, Serialize};

/// Identifier for a bill in the store.
pub type BillId = String;

/// A bill exactly as the store returns it.
///
/// The `date` and `status` fields are raw values: the date is not guaranteed
/// to be a well-formed date and the status may be a code this app does not
/// know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: BillId,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<i64>,
    #[serde(default)]
    pub comment_admin: Option<String>,
}

/// The fields needed to create a bill in the store.
///
/// The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub status: String,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub vat: Option<String>,
    pub pct: Option<i64>,
}

/// A bill ready to be shown to the user.
///
/// Holds every field of the [BillRecord] it was built from, except that `date`
/// holds the formatted date (or the raw date from the store if it could not be
/// formatted) and `status` holds the display label for the status code.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub id: BillId,
    pub email: String,
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub status: String,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub vat: Option<String>,
    pub pct: Option<i64>,
    pub comment_admin: Option<String>,
}

impl DisplayBill {
    /// Build a display bill from `record`, replacing the date and status with
    /// their display strings.
    pub fn from_record(record: BillRecord, date: String, status: String) -> Self {
        Self {
            id: record.id,
            email: record.email,
            bill_type: record.bill_type,
            name: record.name,
            amount: record.amount,
            date,
            status,
            commentary: record.commentary,
            file_url: record.file_url,
            file_name: record.file_name,
            vat: record.vat,
            pct: record.pct,
            comment_admin: record.comment_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bill::BillRecord;

    #[test]
    fn deserializes_store_json() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://example.com/receipt.jpg",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        }"#;

        let record: BillRecord = serde_json::from_str(json).expect("Could not parse bill JSON");

        assert_eq!(record.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(record.bill_type, "Hôtel et logement");
        assert_eq!(record.amount, 400.0);
        assert_eq!(
            record.file_url.as_deref(),
            Some("https://example.com/receipt.jpg")
        );
        assert_eq!(record.comment_admin.as_deref(), Some("ok"));
        assert_eq!(record.pct, Some(20));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "id": "1",
            "email": "a@a",
            "type": "Transports",
            "name": "taxi",
            "amount": 12.5,
            "date": "2021-01-01",
            "status": "accepted"
        }"#;

        let record: BillRecord = serde_json::from_str(json).expect("Could not parse bill JSON");

        assert_eq!(record.file_url, None);
        assert_eq!(record.commentary, None);
        assert_eq!(record.vat, None);
    }
}
