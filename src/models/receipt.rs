// src/models/receipt.rs

use serde::Serialize;
use utoipa::ToSchema;

// Recibo imprimível (bobina 80mm) já formatado: o frontend só desenha.
// Sem valor fiscal; exportação em PDF fica fora do escopo.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    // Cabeçalho do negócio (vem do perfil)
    #[schema(example = "SERVICE FLOW PRO")]
    pub business_name: String,
    #[schema(example = "(11) 99999-0000")]
    pub business_phone: String,
    #[schema(example = "contato@empresa.com")]
    pub business_email: String,

    // Identificação do pedido
    #[schema(example = "#OS-0042")]
    pub order_label: String,
    #[schema(example = "05/01/25 14:30")]
    pub issued_at: String,
    #[schema(example = "Maria Silva")]
    pub client_name: String,
    pub description: Option<String>,

    pub lines: Vec<ReceiptLine>,

    // "- R$ 30,00"; ausente quando não há desconto
    #[schema(example = "- R$ 30,00")]
    pub discount: Option<String>,
    #[schema(example = "R$ 220,00")]
    pub total: String,

    #[schema(example = "AGRADECEMOS A PREFERÊNCIA!")]
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    #[schema(example = "Troca de óleo")]
    pub name: String,
    #[schema(example = "2 x R$ 120,00")]
    pub detail: String,
    #[schema(example = "R$ 240,00")]
    pub line_total: String,
}
