// src/services/custom_field_service.rs

use chrono::NaiveDate;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CustomFieldRepository,
    models::custom_field::{EntityKind, FieldDefinition, FieldKind, FieldValue},
};

#[derive(Clone)]
pub struct CustomFieldService {
    repo: CustomFieldRepository,
}

impl CustomFieldService {
    pub fn new(repo: CustomFieldRepository) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        user_id: Uuid,
        entity_type: Option<EntityKind>,
    ) -> Result<Vec<FieldDefinition>, AppError> {
        self.repo.list(user_id, entity_type).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        entity_type: EntityKind,
        name: &str,
        kind: FieldKind,
        required: bool,
        options: Option<Value>,
        placeholder: Option<&str>,
    ) -> Result<FieldDefinition, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(validation_error("name", "Informe o nome do campo"));
        }

        // Opções só fazem sentido para Select; para os demais tipos são descartadas.
        let options = match kind {
            FieldKind::Select => options,
            _ => None,
        };

        self.repo
            .insert(user_id, entity_type, name, kind, required, options.as_ref(), placeholder)
            .await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(user_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Campo personalizado"));
        }
        Ok(())
    }
}

// =============================================================================
//  CODEC DE VALORES
//  A forma de lista é a de edição (uma entrada por campo, chaveada pelo id da
//  definição); a forma de mapa é a persistida no JSONB da entidade.
// =============================================================================

/// Lista -> mapa. Em caso de `field_id` duplicado, o último valor vence.
pub fn values_to_record(values: &[FieldValue]) -> Map<String, Value> {
    let mut record = Map::new();
    for value in values {
        record.insert(value.field_id.clone(), value.value.clone());
    }
    record
}

/// Mapa -> lista. Uma entrada por chave, na ordem de inserção do mapa.
pub fn record_to_values(record: &Map<String, Value>) -> Vec<FieldValue> {
    record
        .iter()
        .map(|(field_id, value)| FieldValue {
            field_id: field_id.clone(),
            value: value.clone(),
        })
        .collect()
}

// =============================================================================
//  MOTOR DE NORMALIZAÇÃO
//  Um braço por tipo de campo; o match exaustivo garante que um tipo novo
//  não passe despercebido.
// =============================================================================

/// Normaliza um valor submetido conforme o tipo do campo.
///
/// Campos `required` NÃO são exigidos aqui: a obrigatoriedade é apenas
/// sinalizada no formulário (asterisco), nunca bloqueia a submissão.
pub fn normalize_value(definition: &FieldDefinition, value: &Value) -> Value {
    match definition.kind {
        // Texto livre, sem limite de tamanho.
        FieldKind::Text | FieldKind::Textarea => match value {
            Value::String(_) | Value::Null => value.clone(),
            other => Value::String(other.to_string()),
        },

        // Parse inválido vira 0 em silêncio (comportamento do formulário),
        // nunca um erro.
        FieldKind::Number => match value {
            Value::Number(_) => value.clone(),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(parsed) => serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::Number(0.into())),
                Err(_) => Value::Number(0.into()),
            },
            _ => Value::Number(0.into()),
        },

        // String ISO; nenhuma validação de calendário além da do widget.
        // Valores fora do formato são mantidos como vieram.
        FieldKind::Date => {
            if let Value::String(s) = value {
                let _ = NaiveDate::parse_from_str(s, "%Y-%m-%d");
            }
            value.clone()
        }

        // Valor precisa bater com uma das opções atuais; um valor antigo que
        // não bate mais vira seleção vazia.
        FieldKind::Select => {
            let matches_option = definition
                .options
                .as_ref()
                .and_then(|opts| opts.as_array())
                .map(|opts| opts.iter().any(|opt| opt == value))
                .unwrap_or(false);

            if matches_option {
                value.clone()
            } else {
                Value::Null
            }
        }

        FieldKind::Checkbox => Value::Bool(value.as_bool().unwrap_or(false)),
    }
}

/// Converte a lista de edição no mapa persistido, normalizando cada valor
/// contra sua definição. Valores cuja definição não existe mais (órfãos) são
/// um estado previsto: seguem gravados como vieram, só deixam de ser
/// renderizados pelo formulário.
pub fn normalize_custom_fields(definitions: &[FieldDefinition], values: &[FieldValue]) -> Value {
    let mut record = Map::new();
    for entry in values {
        let normalized = definitions
            .iter()
            .find(|def| def.id.to_string() == entry.field_id)
            .map(|def| normalize_value(def, &entry.value))
            .unwrap_or_else(|| entry.value.clone());
        record.insert(entry.field_id.clone(), normalized);
    }
    Value::Object(record)
}

// Helper para erro de validação fora do derive do `validator`.
fn validation_error(field: &'static str, message: &str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut error = validator::ValidationError::new("invalid");
    error.message = Some(message.to_string().into());
    errors.add(field.into(), error);
    AppError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn definition(kind: FieldKind, options: Option<Value>) -> FieldDefinition {
        FieldDefinition {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            entity_type: EntityKind::Order,
            name: "Campo".to_string(),
            kind,
            required: false,
            options,
            placeholder: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn codec_faz_ida_e_volta_com_os_mesmos_pares() {
        let values = vec![
            FieldValue { field_id: "a".into(), value: json!("texto") },
            FieldValue { field_id: "b".into(), value: json!(42) },
            FieldValue { field_id: "c".into(), value: json!(true) },
        ];

        let record = values_to_record(&values);
        let mut round_trip = record_to_values(&record);

        // A ordem não é garantida; os pares sim.
        round_trip.sort_by(|a, b| a.field_id.cmp(&b.field_id));
        let mut expected = values.clone();
        expected.sort_by(|a, b| a.field_id.cmp(&b.field_id));
        assert_eq!(round_trip, expected);
    }

    #[test]
    fn field_id_duplicado_o_ultimo_valor_vence() {
        let values = vec![
            FieldValue { field_id: "a".into(), value: json!("primeiro") },
            FieldValue { field_id: "a".into(), value: json!("segundo") },
        ];

        let record = values_to_record(&values);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a"), Some(&json!("segundo")));
    }

    #[test]
    fn numero_invalido_vira_zero_em_silencio() {
        let def = definition(FieldKind::Number, None);
        assert_eq!(normalize_value(&def, &json!("abc")), json!(0));
        assert_eq!(normalize_value(&def, &json!(null)), json!(0));
        assert_eq!(normalize_value(&def, &json!("12.5")), json!(12.5));
        assert_eq!(normalize_value(&def, &json!(7)), json!(7));
    }

    #[test]
    fn select_com_valor_obsoleto_vira_selecao_vazia() {
        let def = definition(FieldKind::Select, Some(json!(["P", "M", "G"])));
        assert_eq!(normalize_value(&def, &json!("M")), json!("M"));
        // Opção removida da definição: renderiza como vazio
        assert_eq!(normalize_value(&def, &json!("GG")), json!(null));
    }

    #[test]
    fn checkbox_coage_para_booleano() {
        let def = definition(FieldKind::Checkbox, None);
        assert_eq!(normalize_value(&def, &json!(true)), json!(true));
        assert_eq!(normalize_value(&def, &json!("sim")), json!(false));
        assert_eq!(normalize_value(&def, &json!(null)), json!(false));
    }

    #[test]
    fn data_fora_do_formato_e_mantida_como_veio() {
        let def = definition(FieldKind::Date, None);
        assert_eq!(normalize_value(&def, &json!("2025-01-05")), json!("2025-01-05"));
        assert_eq!(normalize_value(&def, &json!("05/01/2025")), json!("05/01/2025"));
    }

    #[test]
    fn valor_orfao_e_preservado_sem_normalizacao() {
        let def = definition(FieldKind::Number, None);
        let values = vec![
            FieldValue { field_id: def.id.to_string(), value: json!("abc") },
            // Definição apagada: o valor segue gravado como veio
            FieldValue { field_id: "orfao".into(), value: json!("qualquer coisa") },
        ];

        let record = normalize_custom_fields(&[def], &values);
        assert_eq!(record["orfao"], json!("qualquer coisa"));
        // O valor com definição foi normalizado normalmente
        assert_eq!(record.as_object().unwrap().len(), 2);
    }

    #[test]
    fn campo_obrigatorio_ausente_nao_bloqueia_a_submissao() {
        let mut def = definition(FieldKind::Text, None);
        def.required = true;

        // Nenhum valor submetido para o campo obrigatório: o mapa sai vazio
        // e nenhum erro é gerado.
        let record = normalize_custom_fields(&[def], &[]);
        assert_eq!(record, json!({}));
    }
}
