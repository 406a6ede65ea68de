// src/common/format.rs

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formata um valor monetário no padrão pt-BR: `1.234,56`.
/// Os valores armazenados não são pré-arredondados; as 2 casas
/// decimais existem apenas na hora de exibir.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (text, "00".to_string()),
    };

    // Agrupa os milhares com ponto, da direita para a esquerda.
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (idx, ch) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{}", sign, grouped, frac_part)
}

/// Data/hora no formato curto do recibo: `dd/MM/aa HH:mm`.
pub fn format_receipt_datetime(moment: DateTime<Utc>) -> String {
    moment.format("%d/%m/%y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn formata_valores_simples() {
        assert_eq!(format_brl(dec!(0)), "0,00");
        assert_eq!(format_brl(dec!(5)), "5,00");
        assert_eq!(format_brl(dec!(150.5)), "150,50");
    }

    #[test]
    fn agrupa_milhares_com_ponto() {
        assert_eq!(format_brl(dec!(1234.56)), "1.234,56");
        assert_eq!(format_brl(dec!(1234567.89)), "1.234.567,89");
    }

    #[test]
    fn arredonda_para_duas_casas_apenas_na_exibicao() {
        assert_eq!(format_brl(dec!(10.005)), "10,01");
        assert_eq!(format_brl(dec!(10.004)), "10,00");
    }

    #[test]
    fn valores_negativos_levam_sinal() {
        assert_eq!(format_brl(dec!(-30)), "-30,00");
    }

    #[test]
    fn data_do_recibo_no_formato_curto() {
        let moment = Utc.with_ymd_and_hms(2025, 1, 5, 14, 30, 0).unwrap();
        assert_eq!(format_receipt_datetime(moment), "05/01/25 14:30");
    }
}
