//! Profile Table

use crate::trait_code::TraitCode;
use serde::Serialize;
use std::collections::HashMap;

/// Human-readable profile for one trait
///
/// Field names on the wire are the ones the web client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Display name
    #[serde(rename = "perfil")]
    pub name: &'static str,
    /// Description text
    #[serde(rename = "descricao")]
    pub description: &'static str,
    /// Suggested careers, in display order
    #[serde(rename = "carreiras_sugeridas")]
    pub careers: &'static [&'static str],
}

const REALISTIC: Profile = Profile {
    name: "O Construtor Pragmático",
    description: "Você gosta de atividades práticas e 'mão na massa'. Você prefere trabalhar com objetos, máquinas e ferramentas a trabalhar com ideias ou pessoas.",
    careers: &["Engenheiro Mecânico", "Eletricista", "Desenvolvedor Back-End"],
};

const INVESTIGATIVE: Profile = Profile {
    name: "O Analista Estratégico",
    description: "Você é curioso, analítico e gosta de resolver problemas complexos. Você prospera em ambientes que exigem pensamento profundo e investigação.",
    careers: &["Cientista de Dados", "Pesquisador", "Analista de Sistemas", "Médico"],
};

const ARTISTIC: Profile = Profile {
    name: "O Comunicador Criativo",
    description: "Você é expressivo, original e gosta de trabalhar em ambientes não estruturados, usando sua imaginação e criatividade.",
    careers: &["Designer de UI/UX", "Escritor", "Arquiteto", "Profissional de Marketing"],
};

const SOCIAL: Profile = Profile {
    name: "O Mentor Social",
    description: "Você gosta de ajudar, ensinar e se conectar com pessoas. Você é motivado por atividades que promovem o bem-estar dos outros.",
    careers: &["Professor", "Terapeuta", "Gerente de RH", "Gerente de Sucesso do Cliente"],
};

const ENTERPRISING: Profile = Profile {
    name: "O Empreendedor Influente",
    description: "Você é ambicioso, assertivo e gosta de liderar, persuadir e assumir riscos para atingir objetivos organizacionais ou econômicos.",
    careers: &["CEO/Fundador", "Advogado", "Gerente de Vendas", "Produtor de Eventos"],
};

const CONVENTIONAL: Profile = Profile {
    name: "O Organizador Sistemático",
    description: "Você é detalhista, organizado e gosta de trabalhar com dados e sistemas de forma clara e estruturada. Você prefere ordem e eficiência.",
    careers: &["Contador", "Analista Financeiro", "Gerente de Projetos (PMO)", "Auditor"],
};

/// Immutable trait -> profile table
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: HashMap<TraitCode, Profile>,
}

impl ProfileCatalog {
    /// The six product profiles
    pub fn standard() -> Self {
        let profiles = HashMap::from([
            (TraitCode::R, REALISTIC),
            (TraitCode::I, INVESTIGATIVE),
            (TraitCode::A, ARTISTIC),
            (TraitCode::S, SOCIAL),
            (TraitCode::E, ENTERPRISING),
            (TraitCode::C, CONVENTIONAL),
        ]);
        Self { profiles }
    }

    /// Profile for a decoded label; `None` unless the label is exactly one of the six letters
    pub fn lookup(&self, label: &str) -> Option<&Profile> {
        let code = label.parse::<TraitCode>().ok()?;
        self.get(code)
    }

    /// Profile for a trait code
    pub fn get(&self, code: TraitCode) -> Option<&Profile> {
        self.profiles.get(&code)
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
