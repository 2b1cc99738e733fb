use crate::shared::config::relay_endpoint;
use contracts::forms::answers::AnswerSet;
use contracts::forms::catalog::EntityKind;
use gloo_net::http::Request;

/// Post one questionnaire to the form-relay channel as a flat key/value
/// payload. Success is the response status; no body contract beyond that.
pub async fn submit(kind: EntityKind, answers: &AnswerSet) -> Result<(), String> {
    let response = Request::post(&relay_endpoint())
        .header("Accept", "application/json")
        .json(&payload(kind, answers))
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

fn payload(kind: EntityKind, answers: &AnswerSet) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    fields.insert("entity".to_string(), kind.as_str().into());
    fields.insert(
        "_subject".to_string(),
        format!("[S.E.T.A.L.] Questionnaire: {}", kind.as_str()).into(),
    );
    // Every schema asks for an email; route replies to it when present.
    if let Some(email) = answers.get("email") {
        fields.insert("_replyto".to_string(), email.into());
    }
    for (id, value) in answers.iter() {
        fields.insert(id.clone(), value.clone().into());
    }
    serde_json::Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_flat_and_carries_routing_metadata() {
        let mut answers = AnswerSet::new();
        answers.set("companyName", "Boulangerie Ndiaye".to_string());
        answers.set("email", "contact@ndiaye.sn".to_string());

        let value = payload(EntityKind::Pme, &answers);
        assert_eq!(value["entity"], "pme");
        assert_eq!(value["_subject"], "[S.E.T.A.L.] Questionnaire: pme");
        assert_eq!(value["_replyto"], "contact@ndiaye.sn");
        assert_eq!(value["companyName"], "Boulangerie Ndiaye");
    }

    #[test]
    fn payload_without_email_has_no_reply_to() {
        let answers = AnswerSet::new();
        let value = payload(EntityKind::Events, &answers);
        assert!(value.get("_replyto").is_none());
    }
}
