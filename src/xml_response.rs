// Response-side data structures for the three canned CC5 XML templates.
// Field values are literal constants from the mocked host; only the order
// id (and, for payments, the transaction date) vary per request.
use chrono::Utc;
use serde::{Deserialize, Serialize};

// Canned success code shared by all templates
const PROC_RETURN_OK: &str = "00";
const RESPONSE_APPROVED: &str = "Approved";

// 3D-Secure challenge response
#[derive(Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[serde(rename = "CC5Response")]
pub struct ThreeDSecureResponse {
    pub order_id: String,
    pub proc_return_code: String,
    pub response: String,
    pub err_msg: String,
    pub extra: ThreeDSecureExtra,
}

#[derive(Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ThreeDSecureExtra {
    #[serde(rename = "ERRORCODE")]
    pub error_code: String,
    #[serde(rename = "NUMCODE")]
    pub num_code: String,
    #[serde(rename = "HOSTMSG")]
    pub host_msg: String,
}

impl ThreeDSecureResponse {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            proc_return_code: PROC_RETURN_OK.to_string(),
            response: RESPONSE_APPROVED.to_string(),
            err_msg: String::new(),
            extra: ThreeDSecureExtra {
                error_code: String::new(),
                num_code: PROC_RETURN_OK.to_string(),
                host_msg: "3D Secure Doğrulama Gerekli".to_string(),
            },
        }
    }
}

// Loyalty-points balance response. The balance literal is configurable,
// so it is a parameter rather than a constant.
#[derive(Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[serde(rename = "CC5Response")]
pub struct LoyaltyQueryResponse {
    pub err_msg: String,
    pub order_id: String,
    pub proc_return_code: String,
    pub response: String,
    pub auth_code: String,
    pub trans_id: String,
    pub host_ref_num: String,
    pub extra: LoyaltyQueryExtra,
}

#[derive(Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoyaltyQueryExtra {
    #[serde(rename = "ERRORCODE")]
    pub error_code: String,
    #[serde(rename = "NUMCODE")]
    pub num_code: String,
    #[serde(rename = "HOSTMSG")]
    pub host_msg: String,
    #[serde(rename = "MAXIPUAN")]
    pub maxi_puan: String,
    #[serde(rename = "HOSTDATE")]
    pub host_date: String,
}

impl LoyaltyQueryResponse {
    pub fn new(order_id: &str, balance: &str) -> Self {
        Self {
            err_msg: String::new(),
            order_id: order_id.to_string(),
            proc_return_code: PROC_RETURN_OK.to_string(),
            response: RESPONSE_APPROVED.to_string(),
            auth_code: "P11222".to_string(),
            trans_id: "25328LPjH13565".to_string(),
            host_ref_num: "532800067953".to_string(),
            extra: LoyaltyQueryExtra {
                error_code: String::new(),
                num_code: PROC_RETURN_OK.to_string(),
                host_msg: format!("TOPLAMMAXIPUAN: {balance} TL"),
                maxi_puan: balance.to_string(),
                host_date: "1124-111536".to_string(),
            },
        }
    }
}

// Default approved-payment response. GroupId always mirrors OrderId and
// TRXDATE carries the render time at second granularity.
#[derive(Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[serde(rename = "CC5Response")]
pub struct PaymentResponse {
    pub order_id: String,
    pub group_id: String,
    pub response: String,
    pub auth_code: String,
    pub host_ref_num: String,
    pub proc_return_code: String,
    pub trans_id: String,
    pub err_msg: String,
    pub extra: PaymentExtra,
}

#[derive(Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PaymentExtra {
    #[serde(rename = "SETTLEID")]
    pub settle_id: String,
    #[serde(rename = "TRXDATE")]
    pub trx_date: String,
    #[serde(rename = "ERRORCODE")]
    pub error_code: String,
    #[serde(rename = "CARDBRAND")]
    pub card_brand: String,
    #[serde(rename = "CARDISSUER")]
    pub card_issuer: String,
    #[serde(rename = "KAZANILANPUAN")]
    pub kazanilan_puan: String,
    #[serde(rename = "NUMCODE")]
    pub num_code: String,
}

impl PaymentResponse {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            group_id: order_id.to_string(),
            response: RESPONSE_APPROVED.to_string(),
            auth_code: "621715".to_string(),
            host_ref_num: "531113545069".to_string(),
            proc_return_code: PROC_RETURN_OK.to_string(),
            trans_id: "25311NVIA12472".to_string(),
            err_msg: String::new(),
            extra: PaymentExtra {
                settle_id: "2885".to_string(),
                trx_date: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                error_code: String::new(),
                card_brand: "MASTERCARD".to_string(),
                card_issuer: "AKBANK T.A.S.".to_string(),
                kazanilan_puan: "000000010.00".to_string(),
                num_code: PROC_RETURN_OK.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use quick_xml::se::to_string;

    #[test]
    fn test_three_d_response_serialization() {
        let xml = to_string(&ThreeDSecureResponse::new("T1")).unwrap();

        assert!(xml.starts_with("<CC5Response>"));
        assert!(xml.contains("<OrderId>T1</OrderId>"));
        assert!(xml.contains("<ProcReturnCode>00</ProcReturnCode>"));
        assert!(xml.contains("<Response>Approved</Response>"));
        assert!(xml.contains("<HOSTMSG>3D Secure Doğrulama Gerekli</HOSTMSG>"));
    }

    #[test]
    fn test_loyalty_response_serialization() {
        let xml = to_string(&LoyaltyQueryResponse::new("L1", "100000.00")).unwrap();

        assert!(xml.contains("<OrderId>L1</OrderId>"));
        assert!(xml.contains("<AuthCode>P11222</AuthCode>"));
        assert!(xml.contains("<TransId>25328LPjH13565</TransId>"));
        assert!(xml.contains("<HostRefNum>532800067953</HostRefNum>"));
        assert!(xml.contains("<HOSTMSG>TOPLAMMAXIPUAN: 100000.00 TL</HOSTMSG>"));
        assert!(xml.contains("<MAXIPUAN>100000.00</MAXIPUAN>"));
        assert!(xml.contains("<HOSTDATE>1124-111536</HOSTDATE>"));
    }

    #[test]
    fn test_loyalty_balance_is_parameterized() {
        let xml = to_string(&LoyaltyQueryResponse::new("L1", "50.00")).unwrap();

        assert!(xml.contains("<HOSTMSG>TOPLAMMAXIPUAN: 50.00 TL</HOSTMSG>"));
        assert!(xml.contains("<MAXIPUAN>50.00</MAXIPUAN>"));
    }

    #[test]
    fn test_payment_response_serialization() {
        let response = PaymentResponse::new("P1");
        assert_eq!(response.order_id, response.group_id);

        let xml = to_string(&response).unwrap();
        assert!(xml.contains("<OrderId>P1</OrderId>"));
        assert!(xml.contains("<GroupId>P1</GroupId>"));
        assert!(xml.contains("<AuthCode>621715</AuthCode>"));
        assert!(xml.contains("<HostRefNum>531113545069</HostRefNum>"));
        assert!(xml.contains("<TransId>25311NVIA12472</TransId>"));
        assert!(xml.contains("<SETTLEID>2885</SETTLEID>"));
        assert!(xml.contains("<CARDBRAND>MASTERCARD</CARDBRAND>"));
        assert!(xml.contains("<CARDISSUER>AKBANK T.A.S.</CARDISSUER>"));
        assert!(xml.contains("<KAZANILANPUAN>000000010.00</KAZANILANPUAN>"));
    }

    #[test]
    fn test_payment_trx_date_is_current_wall_clock() {
        let response = PaymentResponse::new("P1");
        let parsed = NaiveDateTime::parse_from_str(&response.extra.trx_date, "%Y-%m-%d %H:%M:%S")
            .expect("TRXDATE should be formatted at second granularity");

        let delta = Utc::now().naive_utc().signed_duration_since(parsed);
        assert!(delta.num_seconds().abs() < 5);
    }
}
