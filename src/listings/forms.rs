use crate::models::{NewProperty, PropertyType};
use thiserror::Error;

/// Validation failures raised before anything reaches the store
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("please fill in all fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("invalid property type '{0}', expected Casa or Terreno")]
    InvalidType(String),

    #[error("the primary image cannot be removed from the gallery")]
    PrimaryImage,
}

/// Raw add-property form input, one string per field
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    pub nome: String,
    pub tipo: String,
    pub preco: String,
    pub localizacao: String,
    pub imagem_principal: String,
    pub descricao: String,
}

impl PropertyForm {
    /// Presence-check every field and parse the typed ones
    pub fn into_new_property(self) -> Result<NewProperty, FormError> {
        let missing: Vec<&'static str> = [
            ("nome", &self.nome),
            ("preco", &self.preco),
            ("localizacao", &self.localizacao),
            ("imagemPrincipal", &self.imagem_principal),
            ("descricao", &self.descricao),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let tipo = if self.tipo.trim().is_empty() {
            PropertyType::default()
        } else {
            self.tipo
                .parse::<PropertyType>()
                .map_err(|_| FormError::InvalidType(self.tipo.clone()))?
        };

        Ok(NewProperty {
            nome: self.nome.trim().to_string(),
            tipo,
            preco: parse_price(&self.preco)?,
            localizacao: self.localizacao.trim().to_string(),
            imagem_principal: self.imagem_principal.trim().to_string(),
            descricao: self.descricao.trim().to_string(),
        })
    }
}

/// Parse a non-negative price, accepting a comma as decimal separator
pub fn parse_price(input: &str) -> Result<f64, FormError> {
    let normalized = input.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(FormError::InvalidPrice(input.to_string())),
    }
}

/// Render a price the way the listing cards show it: `R$ 350.000,00`
pub fn format_price(preco: f64) -> String {
    let cents = (preco * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("R$ {},{:02}", grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PropertyForm {
        PropertyForm {
            nome: " Casa no Centro ".to_string(),
            tipo: "Terreno".to_string(),
            preco: "350000".to_string(),
            localizacao: "Centro, São Paulo - SP".to_string(),
            imagem_principal: "https://exemplo.com/imagem.jpg".to_string(),
            descricao: "Descreva o imóvel".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let new = filled().into_new_property().unwrap();
        assert_eq!(new.nome, "Casa no Centro");
        assert_eq!(new.tipo, PropertyType::Terreno);
        assert_eq!(new.preco, 350000.0);
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let form = PropertyForm {
            nome: "   ".to_string(),
            descricao: String::new(),
            ..filled()
        };
        assert_eq!(
            form.into_new_property().unwrap_err(),
            FormError::MissingFields(vec!["nome", "descricao"])
        );
    }

    #[test]
    fn test_blank_type_defaults_to_casa() {
        let form = PropertyForm {
            tipo: String::new(),
            ..filled()
        };
        assert_eq!(form.into_new_property().unwrap().tipo, PropertyType::Casa);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let form = PropertyForm {
            tipo: "Apartamento".to_string(),
            ..filled()
        };
        assert_eq!(
            form.into_new_property().unwrap_err(),
            FormError::InvalidType("Apartamento".to_string())
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1500,50"), Ok(1500.5));
        assert_eq!(parse_price(" 0 "), Ok(0.0));
        assert!(parse_price("-1").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("inf").is_err());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(350000.0), "R$ 350.000,00");
        assert_eq!(format_price(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_price(999.5), "R$ 999,50");
        assert_eq!(format_price(0.0), "R$ 0,00");
    }
}
