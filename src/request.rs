// Request-side data structures for the CC5 XML envelope
use serde::Deserialize;

// Inbound CC5 transaction request. Every field the mock cares about is
// optional; anything else in the document (extra elements, attributes,
// namespaces) is ignored by serde rather than rejected.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename = "CC5Request")]
pub struct CC5Request {
    #[serde(rename = "OrderId")]
    pub order_id: Option<String>,
    #[serde(rename = "Extra")]
    pub extra: Option<Cc5Extra>,
}

// The <Extra> subtree. Only STORETYPE and MAXIPUANSORGU drive
// classification; other children are ignored.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cc5Extra {
    #[serde(rename = "STORETYPE")]
    pub store_type: Option<String>,
    #[serde(rename = "MAXIPUANSORGU")]
    pub maxi_puan_sorgu: Option<String>,
}

// The three fields classification operates on, extracted null-safely from
// a parsed request. Empty and whitespace-only values count as absent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestFields {
    pub order_id: Option<String>,
    pub store_type: Option<String>,
    pub maxi_puan_sorgu: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<CC5Request> for RequestFields {
    fn from(request: CC5Request) -> Self {
        let (store_type, maxi_puan_sorgu) = match request.extra {
            Some(extra) => (extra.store_type, extra.maxi_puan_sorgu),
            None => (None, None),
        };

        Self {
            order_id: non_blank(request.order_id),
            store_type: non_blank(store_type),
            maxi_puan_sorgu: non_blank(maxi_puan_sorgu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::de::from_str;

    #[test]
    fn test_parse_full_request() {
        let xml = r#"
        <CC5Request>
            <OrderId>T1</OrderId>
            <Extra>
                <STORETYPE>3d</STORETYPE>
                <MAXIPUANSORGU>MAXIPUANSORGU</MAXIPUANSORGU>
            </Extra>
        </CC5Request>
        "#;

        let request: CC5Request = from_str(xml).expect("well-formed request should parse");
        let fields = RequestFields::from(request);

        assert_eq!(fields.order_id.as_deref(), Some("T1"));
        assert_eq!(fields.store_type.as_deref(), Some("3d"));
        assert_eq!(fields.maxi_puan_sorgu.as_deref(), Some("MAXIPUANSORGU"));
    }

    #[test]
    fn test_missing_subtrees_yield_absence() {
        let request: CC5Request = from_str("<CC5Request></CC5Request>").unwrap();
        let fields = RequestFields::from(request);

        assert_eq!(fields, RequestFields::default());
    }

    #[test]
    fn test_unknown_fields_and_attributes_are_ignored() {
        let xml = r#"
        <CC5Request version="1.0">
            <Name>api_user</Name>
            <OrderId>ABC123</OrderId>
            <Extra source="pos">
                <UNRELATED>x</UNRELATED>
            </Extra>
        </CC5Request>
        "#;

        let request: CC5Request = from_str(xml).expect("unknown content must not fail parsing");
        let fields = RequestFields::from(request);

        assert_eq!(fields.order_id.as_deref(), Some("ABC123"));
        assert_eq!(fields.store_type, None);
        assert_eq!(fields.maxi_puan_sorgu, None);
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let xml = r#"
        <CC5Request>
            <OrderId>  </OrderId>
            <Extra>
                <STORETYPE></STORETYPE>
            </Extra>
        </CC5Request>
        "#;

        let request: CC5Request = from_str(xml).unwrap();
        let fields = RequestFields::from(request);

        assert_eq!(fields.order_id, None);
        assert_eq!(fields.store_type, None);
    }

    #[test]
    fn test_unterminated_tag_fails_to_parse() {
        let result: Result<CC5Request, _> = from_str("<CC5Request><OrderId>");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_body_fails_to_parse() {
        let result: Result<CC5Request, _> = from_str("");
        assert!(result.is_err());
    }
}
