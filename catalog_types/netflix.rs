use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::resource::Resource;

/// A movie or TV show from the Netflix titles catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NetflixTitle {
    pub show_id: String,
    pub tipo: Option<String>,
    pub titulo: Option<String>,
    pub diretor: Option<String>,
    pub elenco: Option<String>,
    pub pais: Option<String>,
    pub adicionado: Option<String>,
    pub ano_lancamento: Option<i32>,
    pub classificacao: Option<String>,
    pub duracao: Option<String>,
    pub listado_em: Option<String>,
    pub descricao: Option<String>,
}

impl Resource for NetflixTitle {
    const TABLE: &'static str = "netflix_titles";
    const PRIMARY_KEY: &'static str = "show_id";

    type Id = String;

    fn id(&self) -> String {
        self.show_id.clone()
    }
}
