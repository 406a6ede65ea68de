// src/services/receipt_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{
        error::AppError,
        format::{format_brl, format_receipt_datetime},
    },
    db::{OrderRepository, ProfileRepository},
    models::{
        order::ServiceOrder,
        profile::Profile,
        receipt::{ReceiptLine, ReceiptView},
    },
};

const RECEIPT_FOOTER: &str = "AGRADECEMOS A PREFERÊNCIA!";
const FALLBACK_BUSINESS_NAME: &str = "SERVICE FLOW PRO";

/// Monta o recibo já formatado (pt-BR) a partir do pedido e do perfil.
/// Toda a formatação mora aqui; o frontend só desenha o texto.
pub fn build_receipt(profile: Option<&Profile>, order: &ServiceOrder) -> ReceiptView {
    let business_name = profile
        .map(|p| p.name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_uppercase())
        .unwrap_or_else(|| FALLBACK_BUSINESS_NAME.to_string());

    // Sem número atribuído, os 8 primeiros dígitos do id servem de etiqueta.
    let order_label = match &order.number {
        Some(number) => format!("#{number}"),
        None => format!("#{}", &order.id.simple().to_string()[..8].to_uppercase()),
    };

    let lines = order
        .services
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| ReceiptLine {
            name: item.name.clone(),
            detail: format!("{} x R$ {}", item.quantity, format_brl(item.price)),
            line_total: format!(
                "R$ {}",
                format_brl(item.price * Decimal::from(item.quantity))
            ),
        })
        .collect();

    let discount = (order.discount > Decimal::ZERO)
        .then(|| format!("- R$ {}", format_brl(order.discount)));

    ReceiptView {
        business_name,
        business_phone: profile.map(|p| p.phone.clone()).unwrap_or_default(),
        business_email: profile.map(|p| p.email.clone()).unwrap_or_default(),
        order_label,
        issued_at: format_receipt_datetime(order.created_at),
        client_name: order.client_name.clone(),
        description: order.description.clone(),
        lines,
        discount,
        total: format!("R$ {}", format_brl(order.total)),
        footer: RECEIPT_FOOTER.to_string(),
    }
}

#[derive(Clone)]
pub struct ReceiptService {
    order_repo: OrderRepository,
    profile_repo: ProfileRepository,
}

impl ReceiptService {
    pub fn new(order_repo: OrderRepository, profile_repo: ProfileRepository) -> Self {
        Self { order_repo, profile_repo }
    }

    pub async fn for_order(&self, user_id: Uuid, order_id: Uuid) -> Result<ReceiptView, AppError> {
        let order = self
            .order_repo
            .find(user_id, order_id)
            .await?
            .ok_or(AppError::NotFound("Ordem de serviço"))?;

        let profile = self.profile_repo.get(user_id).await?;

        Ok(build_receipt(profile.as_ref(), &order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::models::order::{OrderPriority, OrderStatus, ServiceItem};

    fn sample_order() -> ServiceOrder {
        ServiceOrder {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            client_id: None,
            client_name: "Maria Silva".to_string(),
            status: OrderStatus::Finished,
            priority: OrderPriority::Normal,
            total: dec!(220),
            discount: dec!(30),
            description: Some("Revisão completa".to_string()),
            scheduled_at: None,
            number: Some("OS-0042".to_string()),
            image_url: None,
            custom_fields: json!({}),
            services: vec![
                ServiceItem { name: "Troca de óleo".into(), price: dec!(100), quantity: 2 },
                ServiceItem { name: "Alinhamento".into(), price: dec!(50), quantity: 1 },
            ],
            created_at: Utc.with_ymd_and_hms(2025, 1, 5, 14, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 5, 14, 30, 0).unwrap(),
        }
    }

    fn sample_profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: "Oficina da Maria".to_string(),
            email: "contato@oficina.com".to_string(),
            phone: "(11) 99999-0000".to_string(),
            document: String::new(),
            logo_url: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn recibo_completo_com_perfil() {
        let receipt = build_receipt(Some(&sample_profile()), &sample_order());

        assert_eq!(receipt.business_name, "OFICINA DA MARIA");
        assert_eq!(receipt.order_label, "#OS-0042");
        assert_eq!(receipt.issued_at, "05/01/25 14:30");
        assert_eq!(receipt.client_name, "Maria Silva");
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].detail, "2 x R$ 100,00");
        assert_eq!(receipt.lines[0].line_total, "R$ 200,00");
        assert_eq!(receipt.discount.as_deref(), Some("- R$ 30,00"));
        assert_eq!(receipt.total, "R$ 220,00");
        assert_eq!(receipt.footer, "AGRADECEMOS A PREFERÊNCIA!");
    }

    #[test]
    fn sem_perfil_usa_o_cabecalho_padrao() {
        let receipt = build_receipt(None, &sample_order());

        assert_eq!(receipt.business_name, "SERVICE FLOW PRO");
        assert_eq!(receipt.business_phone, "");
        assert_eq!(receipt.business_email, "");
    }

    #[test]
    fn desconto_zero_nao_aparece() {
        let mut order = sample_order();
        order.discount = Decimal::ZERO;
        order.total = dec!(250);

        let receipt = build_receipt(None, &order);
        assert!(receipt.discount.is_none());
        assert_eq!(receipt.total, "R$ 250,00");
    }

    #[test]
    fn pedido_sem_numero_usa_o_prefixo_do_id() {
        let mut order = sample_order();
        order.number = None;

        let receipt = build_receipt(None, &order);
        assert!(receipt.order_label.starts_with('#'));
        assert_eq!(receipt.order_label.len(), 9);
    }
}
