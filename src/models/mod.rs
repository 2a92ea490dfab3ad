use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of property being listed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    #[default]
    Casa,
    Terreno,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Casa => f.write_str("Casa"),
            PropertyType::Terreno => f.write_str("Terreno"),
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casa" => Ok(PropertyType::Casa),
            "terreno" => Ok(PropertyType::Terreno),
            other => Err(format!("unknown property type '{}'", other)),
        }
    }
}

/// Core property listing record, as persisted in the collection entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub nome: String,
    pub tipo: PropertyType,
    pub preco: f64,
    pub localizacao: String,
    pub imagem_principal: String,
    pub descricao: String,
    pub galeria: Vec<String>,
}

/// A listing before the store has assigned it an id.
///
/// The gallery is not part of the input: the store seeds it from
/// `imagem_principal` on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub nome: String,
    pub tipo: PropertyType,
    pub preco: f64,
    pub localizacao: String,
    pub imagem_principal: String,
    pub descricao: String,
}

/// Partial update merged over an existing record.
///
/// Present fields replace the stored value wholesale (including `galeria`),
/// absent fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagem_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub galeria: Option<Vec<String>>,
}

impl PropertyUpdate {
    /// Update that only replaces the gallery
    pub fn galeria(galeria: Vec<String>) -> Self {
        Self {
            galeria: Some(galeria),
            ..Self::default()
        }
    }
}

impl Property {
    /// Build a stored record from its input, seeding the gallery with the primary image
    pub fn from_new(id: String, new: NewProperty) -> Self {
        let galeria = vec![new.imagem_principal.clone()];
        Self {
            id,
            nome: new.nome,
            tipo: new.tipo,
            preco: new.preco,
            localizacao: new.localizacao,
            imagem_principal: new.imagem_principal,
            descricao: new.descricao,
            galeria,
        }
    }

    /// Shallow merge of `update` over this record
    pub fn apply(&mut self, update: PropertyUpdate) {
        if let Some(nome) = update.nome {
            self.nome = nome;
        }
        if let Some(tipo) = update.tipo {
            self.tipo = tipo;
        }
        if let Some(preco) = update.preco {
            self.preco = preco;
        }
        if let Some(localizacao) = update.localizacao {
            self.localizacao = localizacao;
        }
        if let Some(imagem_principal) = update.imagem_principal {
            self.imagem_principal = imagem_principal;
        }
        if let Some(descricao) = update.descricao {
            self.descricao = descricao;
        }
        if let Some(galeria) = update.galeria {
            self.galeria = galeria;
        }
    }
}
