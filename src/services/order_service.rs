// src/services/order_service.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CatalogRepository, CustomFieldRepository, OrderRepository},
    models::{
        custom_field::{EntityKind, FieldValue},
        order::{OrderPriority, OrderStatus, ServiceItem, ServiceOrder},
    },
    services::custom_field_service::normalize_custom_fields,
};

// =============================================================================
//  CÁLCULO DO TOTAL (puro)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub total: Decimal,
}

/// Invariante do pedido: `total = max(0, soma(preço * quantidade) - desconto)`.
/// Linhas com quantidade zerada não contam.
pub fn compute_totals(items: &[ServiceItem], discount: Decimal) -> Totals {
    let subtotal: Decimal = items
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();

    let total = std::cmp::max(subtotal - discount, Decimal::ZERO);

    Totals { subtotal, total }
}

/// Adiciona um serviço ao pedido. Se já existe uma linha com o mesmo nome,
/// incrementa a quantidade em vez de duplicar a linha.
pub fn add_service(items: &mut Vec<ServiceItem>, name: &str, price: Decimal) {
    if let Some(existing) = items.iter_mut().find(|item| item.name == name) {
        existing.quantity += 1;
    } else {
        items.push(ServiceItem {
            name: name.to_string(),
            price,
            quantity: 1,
        });
    }
}

/// Ajusta a quantidade de uma linha (delta positivo ou negativo, piso em 0).
/// Chegar a 0 remove a linha por inteiro. Retorna false se a linha não existe.
pub fn change_quantity(items: &mut Vec<ServiceItem>, name: &str, delta: i32) -> bool {
    let Some(position) = items.iter().position(|item| item.name == name) else {
        return false;
    };

    let item = &mut items[position];
    item.quantity = (item.quantity + delta).max(0);
    if item.quantity == 0 {
        items.remove(position);
    }

    true
}

// =============================================================================
//  ORQUESTRAÇÃO
// =============================================================================

#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
    catalog_repo: CatalogRepository,
    field_repo: CustomFieldRepository,
    pool: sqlx::PgPool,
}

#[derive(Debug, Default)]
pub struct OrderDraft {
    pub client_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
    pub priority: Option<OrderPriority>,
    pub services: Option<Vec<ServiceItem>>,
    pub discount: Option<Decimal>,
    pub description: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub number: Option<String>,
    pub image_url: Option<String>,
    pub custom_fields: Option<Vec<FieldValue>>,
}

impl OrderService {
    pub fn new(
        repo: OrderRepository,
        catalog_repo: CatalogRepository,
        field_repo: CustomFieldRepository,
        pool: sqlx::PgPool,
    ) -> Self {
        Self { repo, catalog_repo, field_repo, pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ServiceOrder>, AppError> {
        self.repo.list(user_id).await
    }

    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<ServiceOrder, AppError> {
        self.repo
            .find(user_id, id)
            .await?
            .ok_or(AppError::NotFound("Ordem de serviço"))
    }

    /// Cria cabeçalho + itens numa única transação. O total nunca é aceito do
    /// cliente: é sempre recalculado aqui a partir dos itens e do desconto.
    pub async fn create(&self, user_id: Uuid, draft: OrderDraft) -> Result<ServiceOrder, AppError> {
        let items: Vec<ServiceItem> = draft
            .services
            .unwrap_or_default()
            .into_iter()
            .filter(|item| item.quantity > 0)
            .collect();

        let discount = draft.discount.unwrap_or(Decimal::ZERO);
        let totals = compute_totals(&items, discount);

        let custom_fields = self
            .normalized_fields(user_id, draft.custom_fields.as_deref())
            .await?
            .unwrap_or_else(|| Value::Object(Default::default()));

        let mut tx = self.pool.begin().await?;

        let order_id = self
            .repo
            .insert_order(
                &mut *tx,
                user_id,
                draft.client_id,
                draft.status.unwrap_or(OrderStatus::Start),
                draft.priority.unwrap_or(OrderPriority::Normal),
                totals.total,
                discount,
                draft.description.as_deref(),
                draft.scheduled_at,
                draft.number.as_deref(),
                draft.image_url.as_deref(),
                &custom_fields,
            )
            .await?;

        for item in &items {
            self.repo.insert_item(&mut *tx, order_id, item).await?;
        }

        tx.commit().await?;

        self.get(user_id, order_id).await
    }

    /// Atualização com semântica replace-all para os itens: se `services`
    /// vier no payload, o conjunto inteiro é trocado; ausente, fica intacto.
    /// Cabeçalho e itens mudam na mesma transação — nada de estado parcial
    /// quando o segundo passo falha.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        draft: OrderDraft,
    ) -> Result<ServiceOrder, AppError> {
        let existing = self.get(user_id, id).await?;

        let items: Vec<ServiceItem> = match &draft.services {
            Some(services) => services
                .iter()
                .filter(|item| item.quantity > 0)
                .cloned()
                .collect(),
            None => existing.services.clone(),
        };
        let discount = draft.discount.unwrap_or(existing.discount);
        let totals = compute_totals(&items, discount);

        let custom_fields = self
            .normalized_fields(user_id, draft.custom_fields.as_deref())
            .await?;

        let mut tx = self.pool.begin().await?;

        self.repo
            .update_order(
                &mut *tx,
                user_id,
                id,
                draft.client_id,
                draft.status,
                draft.priority,
                Some(totals.total),
                Some(discount),
                draft.description.as_deref(),
                draft.scheduled_at,
                draft.number.as_deref(),
                draft.image_url.as_deref(),
                custom_fields.as_ref(),
            )
            .await?;

        if draft.services.is_some() {
            self.repo.delete_items(&mut *tx, id).await?;
            for item in &items {
                self.repo.insert_item(&mut *tx, id, item).await?;
            }
        }

        tx.commit().await?;

        self.get(user_id, id).await
    }

    /// Adiciona um serviço do catálogo ao pedido (cópia de nome/preço no ato).
    pub async fn add_catalog_service(
        &self,
        user_id: Uuid,
        order_id: Uuid,
        service_id: Uuid,
    ) -> Result<ServiceOrder, AppError> {
        let order = self.get(user_id, order_id).await?;
        let service = self
            .catalog_repo
            .find(user_id, service_id)
            .await?
            .ok_or(AppError::NotFound("Serviço"))?;

        let mut items = order.services.clone();
        add_service(&mut items, &service.name, service.price);

        self.replace_items(user_id, order_id, order.discount, items).await
    }

    /// Incrementa/decrementa a quantidade de uma linha; 0 remove a linha.
    pub async fn change_item_quantity(
        &self,
        user_id: Uuid,
        order_id: Uuid,
        name: &str,
        delta: i32,
    ) -> Result<ServiceOrder, AppError> {
        let order = self.get(user_id, order_id).await?;

        let mut items = order.services.clone();
        if !change_quantity(&mut items, name, delta) {
            return Err(AppError::NotFound("Item do pedido"));
        }

        self.replace_items(user_id, order_id, order.discount, items).await
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repo.delete(user_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Ordem de serviço"));
        }
        Ok(())
    }

    async fn replace_items(
        &self,
        user_id: Uuid,
        order_id: Uuid,
        discount: Decimal,
        items: Vec<ServiceItem>,
    ) -> Result<ServiceOrder, AppError> {
        let totals = compute_totals(&items, discount);

        let mut tx = self.pool.begin().await?;

        self.repo
            .update_order(
                &mut *tx,
                user_id,
                order_id,
                None,
                None,
                None,
                Some(totals.total),
                None,
                None,
                None,
                None,
                None,
                None,
            )
            .await?;

        self.repo.delete_items(&mut *tx, order_id).await?;
        for item in &items {
            self.repo.insert_item(&mut *tx, order_id, item).await?;
        }

        tx.commit().await?;

        self.get(user_id, order_id).await
    }

    async fn normalized_fields(
        &self,
        user_id: Uuid,
        values: Option<&[FieldValue]>,
    ) -> Result<Option<Value>, AppError> {
        let Some(values) = values else {
            return Ok(None);
        };

        let definitions = self.field_repo.list(user_id, Some(EntityKind::Order)).await?;
        Ok(Some(normalize_custom_fields(&definitions, values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(name: &str, price: Decimal, quantity: i32) -> ServiceItem {
        ServiceItem { name: name.to_string(), price, quantity }
    }

    #[test]
    fn subtotal_menos_desconto() {
        // A: 100 x2, B: 50 x1, desconto 30 -> subtotal 250, total 220
        let items = vec![item("A", dec!(100), 2), item("B", dec!(50), 1)];
        let totals = compute_totals(&items, dec!(30));
        assert_eq!(totals.subtotal, dec!(250));
        assert_eq!(totals.total, dec!(220));
    }

    #[test]
    fn desconto_maior_que_o_subtotal_trava_no_zero() {
        let items = vec![item("A", dec!(100), 2), item("B", dec!(50), 1)];
        let totals = compute_totals(&items, dec!(300));
        assert_eq!(totals.subtotal, dec!(250));
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn total_igual_a_subtotal_menos_desconto_quando_nao_trava() {
        let items = vec![item("A", dec!(80.5), 1)];
        let totals = compute_totals(&items, dec!(10));
        assert_eq!(totals.total, totals.subtotal - dec!(10));
    }

    #[test]
    fn linhas_zeradas_nao_contam_no_subtotal() {
        let items = vec![item("A", dec!(100), 0), item("B", dec!(50), 1)];
        let totals = compute_totals(&items, Decimal::ZERO);
        assert_eq!(totals.subtotal, dec!(50));
    }

    #[test]
    fn adicionar_o_mesmo_servico_incrementa_a_quantidade() {
        let mut items = Vec::new();
        add_service(&mut items, "Troca de óleo", dec!(120));
        add_service(&mut items, "Troca de óleo", dec!(120));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn servicos_diferentes_geram_linhas_separadas() {
        let mut items = Vec::new();
        add_service(&mut items, "Troca de óleo", dec!(120));
        add_service(&mut items, "Alinhamento", dec!(80));

        assert_eq!(items.len(), 2);
    }

    #[test]
    fn decrementar_ate_zero_remove_a_linha() {
        let mut items = vec![item("A", dec!(100), 1)];
        assert!(change_quantity(&mut items, "A", -1));
        assert!(items.is_empty());
    }

    #[test]
    fn quantidade_nunca_fica_negativa() {
        let mut items = vec![item("A", dec!(100), 1)];
        change_quantity(&mut items, "A", -5);
        assert!(items.is_empty());
    }

    #[test]
    fn ajustar_linha_inexistente_retorna_false() {
        let mut items = vec![item("A", dec!(100), 1)];
        assert!(!change_quantity(&mut items, "B", 1));
        assert_eq!(items.len(), 1);
    }
}
