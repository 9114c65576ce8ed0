use crate::soap::auth::AuthHeader;

pub const XMLNS_SOAP: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XMLNS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XMLNS_MKTOWS: &str = "http://www.marketo.com/mktows/";

/// Renders the full document for one RPC call: envelope, signed
/// authentication header, and the operation body.
pub fn render(operation: &str, user_id: &str, auth: &AuthHeader, body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="{soap}" xmlns:xsi="{xsi}" xmlns:ns1="{mktows}">"#,
            "<SOAP-ENV:Header><ns1:AuthenticationHeader>{user}{signature}{timestamp}",
            "</ns1:AuthenticationHeader></SOAP-ENV:Header>",
            "<SOAP-ENV:Body><ns1:{operation}>{body}</ns1:{operation}></SOAP-ENV:Body>",
            "</SOAP-ENV:Envelope>",
        ),
        soap = XMLNS_SOAP,
        xsi = XMLNS_XSI,
        mktows = XMLNS_MKTOWS,
        user = element("mktowsUserId", user_id),
        signature = element("requestSignature", &auth.signature),
        timestamp = element("requestTimestamp", &auth.timestamp),
        operation = operation,
        body = body,
    )
}

/// One text element with an escaped payload.
pub fn element(name: &str, text: &str) -> String {
    format!("<{name}>{}</{name}>", escape_text(text))
}

/// Escapes the five characters XML reserves in text content.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::auth;

    #[test]
    fn envelope_carries_the_signed_header_and_body() {
        let header = auth::sign_at("2015-07-06 19:00:02 +0900", "user", "key");
        let rendered = render("paramsGetMultipleLeads", "user", &header, "<batchSize>1000</batchSize>");

        assert!(rendered.contains("<mktowsUserId>user</mktowsUserId>"));
        assert!(rendered.contains(&format!(
            "<requestSignature>{}</requestSignature>",
            header.signature
        )));
        assert!(rendered.contains("<requestTimestamp>2015-07-06 19:00:02 +0900</requestTimestamp>"));
        assert!(rendered.contains("<ns1:paramsGetMultipleLeads><batchSize>1000</batchSize></ns1:paramsGetMultipleLeads>"));
        assert!(roxmltree::Document::parse(&rendered).is_ok());
    }

    #[test]
    fn text_payloads_are_escaped() {
        assert_eq!(
            element("oldestUpdatedAt", "a<b&\"c\""),
            "<oldestUpdatedAt>a&lt;b&amp;&quot;c&quot;</oldestUpdatedAt>"
        );
    }
}
