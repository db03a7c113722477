//! Brazilian states and a short list of cities for the address form selects.

use serde::Serialize;

/// A federative unit with the cities offered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrazilianState {
    /// Two-letter code (UF).
    pub code: &'static str,
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

/// An option in a select input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn same(text: &str) -> Self {
        Self {
            value: text.to_string(),
            label: text.to_string(),
        }
    }
}

pub const BRAZILIAN_STATES: &[BrazilianState] = &[
    state("AC", "Acre", &["Rio Branco", "Cruzeiro do Sul", "Sena Madureira"]),
    state("AL", "Alagoas", &["Maceió", "Arapiraca", "União dos Palmares"]),
    state("AM", "Amazonas", &["Manaus", "Parintins", "Itacoatiara"]),
    state("AP", "Amapá", &["Macapá", "Santana", "Oiapoque"]),
    state("BA", "Bahia", &["Salvador", "Feira de Santana", "Ilhéus"]),
    state("CE", "Ceará", &["Fortaleza", "Juazeiro do Norte", "Sobral"]),
    state("DF", "Distrito Federal", &["Brasília", "Ceilândia", "Taguatinga"]),
    state("ES", "Espírito Santo", &["Vitória", "Vila Velha", "Serra"]),
    state("GO", "Goiás", &["Goiânia", "Anápolis", "Aparecida de Goiânia"]),
    state("MA", "Maranhão", &["São Luís", "Imperatriz", "Caxias"]),
    state("MG", "Minas Gerais", &["Belo Horizonte", "João Monlevade", "Uberlândia"]),
    state("MS", "Mato Grosso do Sul", &["Campo Grande", "Dourados", "Três Lagoas"]),
    state("MT", "Mato Grosso", &["Cuiabá", "Rondonópolis", "Sinop"]),
    state("PA", "Pará", &["Belém", "Ananindeua", "Santarém"]),
    state("PB", "Paraíba", &["João Pessoa", "Campina Grande", "Patos"]),
    state("PE", "Pernambuco", &["Recife", "Olinda", "Caruaru"]),
    state("PI", "Piauí", &["Teresina", "Parnaíba", "Picos"]),
    state("PR", "Paraná", &["Curitiba", "Londrina", "Maringá"]),
    state("RJ", "Rio de Janeiro", &["Rio de Janeiro", "Niterói", "Campos dos Goytacazes"]),
    state("RN", "Rio Grande do Norte", &["Natal", "Mossoró", "Parnamirim"]),
    state("RO", "Rondônia", &["Porto Velho", "Ji-Paraná", "Ariquemes"]),
    state("RR", "Roraima", &["Boa Vista", "Rorainópolis", "Caracaraí"]),
    state("RS", "Rio Grande do Sul", &["Porto Alegre", "Caxias do Sul", "Pelotas"]),
    state("SC", "Santa Catarina", &["Florianópolis", "Joinville", "Blumenau"]),
    state("SE", "Sergipe", &["Aracaju", "Nossa Senhora do Socorro", "Lagarto"]),
    state("SP", "São Paulo", &["São Paulo", "Campinas", "Santos"]),
    state("TO", "Tocantins", &["Palmas", "Araguaína", "Gurupi"]),
];

const fn state(
    code: &'static str,
    name: &'static str,
    cities: &'static [&'static str],
) -> BrazilianState {
    BrazilianState { code, name, cities }
}

/// Look up a state by its UF code, ignoring case.
#[must_use]
pub fn find_state(code: &str) -> Option<&'static BrazilianState> {
    BRAZILIAN_STATES
        .iter()
        .find(|state| state.code.eq_ignore_ascii_case(code.trim()))
}

/// Options for the state select, labelled `"MG - Minas Gerais"`.
#[must_use]
pub fn state_options() -> Vec<SelectOption> {
    BRAZILIAN_STATES
        .iter()
        .map(|state| SelectOption {
            value: state.code.to_string(),
            label: format!("{} - {}", state.code, state.name),
        })
        .collect()
}

/// Options for the city select.
///
/// Empty until a known state is chosen. A city already stored on an address
/// but missing from the list is kept as an extra option so editing does not
/// silently drop it.
#[must_use]
pub fn city_options(state_code: &str, current_city: &str) -> Vec<SelectOption> {
    let Some(state) = find_state(state_code) else {
        return Vec::new();
    };
    let mut options: Vec<SelectOption> = state.cities.iter().map(|c| SelectOption::same(c)).collect();
    let current = current_city.trim();
    if !current.is_empty() && !state.cities.contains(&current) {
        options.push(SelectOption::same(current));
    }
    options
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_listed_once() {
        assert_eq!(BRAZILIAN_STATES.len(), 27);
        let mut codes: Vec<_> = BRAZILIAN_STATES.iter().map(|s| s.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 27);
        assert!(BRAZILIAN_STATES.iter().all(|s| s.cities.len() == 3));
    }

    #[test]
    fn test_state_option_label() {
        let options = state_options();
        let mg = options.iter().find(|o| o.value == "MG").unwrap();
        assert_eq!(mg.label, "MG - Minas Gerais");
    }

    #[test]
    fn test_city_options() {
        let cities = city_options("mg", "");
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[1].value, "João Monlevade");

        assert!(city_options("", "").is_empty());
        assert!(city_options("XX", "Qualquer").is_empty());
    }

    #[test]
    fn test_unknown_current_city_is_kept() {
        let cities = city_options("MG", "Itabira");
        assert_eq!(cities.len(), 4);
        assert_eq!(cities[3].label, "Itabira");
    }
}
