//! Address book card: pick a shipping address, add or edit one in a modal,
//! and remove one after confirmation.
//!
//! The card never edits its own list. Creations, edits and removals are
//! reported as events; the host answers by calling
//! [`ManageAddressesCard::set_addresses`] with the new list.

use serde::Serialize;
use tracing::debug;
use vitrine_core::{Address, AddressField, AddressFieldError, AddressForm, AddressId};

use super::regions::{self, SelectOption};
use crate::events::{EventSink, SurfaceEvent};

/// Whether the modal creates a new address or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum ModalMode {
    Create,
    Edit(AddressId),
}

impl ModalMode {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Create => "Novo endereço",
            Self::Edit(_) => "Editar endereço",
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub const fn action_label(&self) -> &'static str {
        match self {
            Self::Create => "Cadastrar endereço",
            Self::Edit(_) => "Salvar alterações",
        }
    }
}

/// Open address modal with its form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressModal {
    pub mode: ModalMode,
    pub form: AddressForm,
    /// Problems found on the last submit attempt.
    pub errors: Vec<AddressFieldError>,
}

impl AddressModal {
    fn new(mode: ModalMode, form: AddressForm) -> Self {
        Self {
            mode,
            form,
            errors: Vec::new(),
        }
    }

    /// Choose a state. The city is cleared since it belonged to the old one.
    pub fn select_state(&mut self, uf: &str) {
        self.form.set_field(AddressField::State, uf);
        self.form.city.clear();
    }

    pub fn select_city(&mut self, city: &str) {
        self.form.set_field(AddressField::City, city);
    }

    #[must_use]
    pub fn city_options(&self) -> Vec<SelectOption> {
        regions::city_options(&self.form.state, &self.form.city)
    }
}

/// Confirmation dialog shown before an address is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalPrompt {
    pub id: AddressId,
    pub title: &'static str,
    pub description: String,
    pub message: String,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

impl RemovalPrompt {
    fn for_address(address: &Address) -> Self {
        Self {
            id: address.id.clone(),
            title: "Remover endereço",
            description: address.summary(),
            message: format!("Deseja remover o endereço \"{}\"?", address.label),
            cancel_label: "Cancelar",
            confirm_label: "Remover",
        }
    }
}

/// One address in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRow {
    pub id: AddressId,
    pub label: String,
    /// `"Rua das Flores, 123 - Ap. 402"`
    pub line1: String,
    /// `"Centro - João Monlevade/MG - CEP 35930-000"`
    pub line2: String,
    pub selected: bool,
}

impl AddressRow {
    fn render(address: &Address, selected: bool) -> Self {
        let mut line1 = format!("{}, {}", address.street, address.residence_number);
        if let Some(complement) = address.complement.as_deref().filter(|c| !c.is_empty()) {
            line1.push_str(" - ");
            line1.push_str(complement);
        }

        let mut line2 = format!(
            "{} - {}/{}",
            address.neighborhood, address.city, address.state
        );
        if !address.zip_code.is_empty() {
            line2.push_str(" - CEP ");
            line2.push_str(&address.zip_code);
        }

        Self {
            id: address.id.clone(),
            label: address.label.clone(),
            line1,
            line2,
            selected,
        }
    }
}

/// Rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressesView {
    pub heading: &'static str,
    /// `"Endereço selecionado: Casa"`, when something is selected.
    pub selected_caption: Option<String>,
    pub rows: Vec<AddressRow>,
    pub empty_message: Option<&'static str>,
    pub create_label: &'static str,
}

/// Address picker with create, edit and remove flows.
#[derive(Debug, Clone, Default)]
pub struct ManageAddressesCard {
    addresses: Vec<Address>,
    /// Selection imposed by the host. Wins over `local_selection`.
    controlled: Option<AddressId>,
    local_selection: Option<AddressId>,
    modal: Option<AddressModal>,
    pending_removal: Option<AddressId>,
}

impl ManageAddressesCard {
    pub const HEADING: &'static str = "Selecione seu endereço";
    pub const EMPTY_MESSAGE: &'static str = "Nenhum endereço cadastrado ainda.";
    pub const CREATE_LABEL: &'static str = "Cadastrar novo endereço";

    /// An uncontrolled card. The first address starts out selected.
    #[must_use]
    pub fn new(addresses: Vec<Address>) -> Self {
        Self {
            addresses,
            ..Self::default()
        }
    }

    /// A card whose selection is driven by the host.
    #[must_use]
    pub fn controlled(addresses: Vec<Address>, selected: Option<AddressId>) -> Self {
        Self {
            addresses,
            controlled: selected,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Replace the list, e.g. after the host handled an event.
    ///
    /// A pending removal or local selection pointing at an address that is
    /// gone is dropped.
    pub fn set_addresses(&mut self, addresses: Vec<Address>) {
        self.addresses = addresses;
        if self
            .pending_removal
            .as_ref()
            .is_some_and(|id| self.find(id).is_none())
        {
            self.pending_removal = None;
        }
        if self
            .local_selection
            .as_ref()
            .is_some_and(|id| self.find(id).is_none())
        {
            self.local_selection = None;
        }
    }

    /// Update the host-driven selection. `None` hands control back.
    pub fn set_controlled_selection(&mut self, selected: Option<AddressId>) {
        self.controlled = selected;
    }

    fn find(&self, id: &AddressId) -> Option<&Address> {
        self.addresses.iter().find(|address| &address.id == id)
    }

    /// The address currently highlighted.
    ///
    /// A host-controlled id that is not in the list highlights nothing.
    #[must_use]
    pub fn selected(&self) -> Option<&Address> {
        match &self.controlled {
            Some(id) => self.find(id),
            None => self
                .local_selection
                .as_ref()
                .and_then(|id| self.find(id))
                .or_else(|| self.addresses.first()),
        }
    }

    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected().map(|address| address.label.as_str())
    }

    /// Select an address and tell the host. Unknown IDs are ignored.
    pub fn select(&mut self, id: &AddressId, sink: &mut dyn EventSink) {
        if self.find(id).is_none() {
            debug!(%id, "ignoring selection of unknown address");
            return;
        }
        if self.controlled.is_none() {
            self.local_selection = Some(id.clone());
        }
        sink.emit(SurfaceEvent::AddressSelected(id.clone()));
    }

    #[must_use]
    pub const fn modal(&self) -> Option<&AddressModal> {
        self.modal.as_ref()
    }

    pub const fn modal_mut(&mut self) -> Option<&mut AddressModal> {
        self.modal.as_mut()
    }

    /// Open an empty form.
    pub fn open_create(&mut self) {
        self.modal = Some(AddressModal::new(ModalMode::Create, AddressForm::default()));
    }

    /// Open the form prefilled with an existing address.
    pub fn open_edit(&mut self, id: &AddressId) {
        match self.find(id) {
            Some(address) => {
                let form = AddressForm::from(address);
                self.modal = Some(AddressModal::new(ModalMode::Edit(id.clone()), form));
            }
            None => debug!(%id, "ignoring edit of unknown address"),
        }
    }

    /// Close the modal, discarding its values.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Set a form field on the open modal.
    pub fn set_field(&mut self, field: AddressField, value: &str) {
        if let Some(modal) = &mut self.modal {
            modal.form.set_field(field, value);
        }
    }

    /// Validate and submit the open modal.
    ///
    /// On success, emits [`SurfaceEvent::AddressCreated`] or
    /// [`SurfaceEvent::AddressUpdated`] and closes the modal. With no modal
    /// open this does nothing.
    ///
    /// # Errors
    ///
    /// Returns the validation problems and keeps the modal open with them.
    pub fn submit(&mut self, sink: &mut dyn EventSink) -> Result<(), Vec<AddressFieldError>> {
        let Some(modal) = &mut self.modal else {
            return Ok(());
        };
        if let Err(errors) = modal.form.validate() {
            modal.errors.clone_from(&errors);
            return Err(errors);
        }

        let Some(modal) = self.modal.take() else {
            return Ok(());
        };
        match modal.mode {
            ModalMode::Create => sink.emit(SurfaceEvent::AddressCreated(modal.form)),
            ModalMode::Edit(id) => match self.find(&id) {
                Some(address) => {
                    sink.emit(SurfaceEvent::AddressUpdated(address.merged_with(modal.form)));
                }
                None => debug!(%id, "edited address disappeared before submit"),
            },
        }
        Ok(())
    }

    /// First step of removal: ask for confirmation.
    pub fn request_removal(&mut self, id: &AddressId) {
        if self.find(id).is_some() {
            self.pending_removal = Some(id.clone());
        }
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// Second step of removal: emit [`SurfaceEvent::AddressRemoved`].
    pub fn confirm_removal(&mut self, sink: &mut dyn EventSink) {
        if let Some(id) = self.pending_removal.take() {
            sink.emit(SurfaceEvent::AddressRemoved(id));
        }
    }

    #[must_use]
    pub fn removal_prompt(&self) -> Option<RemovalPrompt> {
        self.pending_removal
            .as_ref()
            .and_then(|id| self.find(id))
            .map(RemovalPrompt::for_address)
    }

    #[must_use]
    pub fn view(&self) -> AddressesView {
        let selected_id = self.selected().map(|address| &address.id);
        let rows: Vec<AddressRow> = self
            .addresses
            .iter()
            .map(|address| AddressRow::render(address, Some(&address.id) == selected_id))
            .collect();

        AddressesView {
            heading: Self::HEADING,
            selected_caption: self
                .selected_label()
                .map(|label| format!("Endereço selecionado: {label}")),
            empty_message: rows.is_empty().then_some(Self::EMPTY_MESSAGE),
            rows,
            create_label: Self::CREATE_LABEL,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use vitrine_core::DEFAULT_COUNTRY;

    use super::*;
    use crate::events::RecordingSink;

    fn address(id: &str, label: &str, street: &str, complement: Option<&str>) -> Address {
        Address {
            id: AddressId::new(id),
            label: label.to_string(),
            street: street.to_string(),
            residence_number: "123".to_string(),
            complement: complement.map(str::to_string),
            neighborhood: "Centro".to_string(),
            city: "João Monlevade".to_string(),
            state: "MG".to_string(),
            zip_code: "35930-000".to_string(),
            country: Some(DEFAULT_COUNTRY.to_string()),
        }
    }

    fn book() -> Vec<Address> {
        vec![
            address("addr-1", "Casa", "Rua das Flores", Some("Ap. 402, Bloco B")),
            address("addr-2", "Trabalho", "Av. Paulista", None),
        ]
    }

    #[test]
    fn test_uncontrolled_defaults_to_first_and_follows_clicks() {
        let mut card = ManageAddressesCard::new(book());
        let mut sink = RecordingSink::new();
        assert_eq!(card.selected_label(), Some("Casa"));

        card.select(&"addr-2".into(), &mut sink);
        assert_eq!(card.selected_label(), Some("Trabalho"));
        assert_eq!(sink.events(), [SurfaceEvent::AddressSelected("addr-2".into())]);

        card.select(&"nope".into(), &mut sink);
        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn test_controlled_selection_wins() {
        let mut card = ManageAddressesCard::controlled(book(), Some("addr-2".into()));
        let mut sink = RecordingSink::new();

        card.select(&"addr-1".into(), &mut sink);
        assert_eq!(card.selected_label(), Some("Trabalho"));
        assert_eq!(sink.events().len(), 1);

        card.set_controlled_selection(Some("addr-1".into()));
        assert_eq!(card.selected_label(), Some("Casa"));
    }

    #[test]
    fn test_unknown_controlled_selection_highlights_nothing() {
        let mut card = ManageAddressesCard::controlled(book(), Some("addr-9".into()));
        assert_eq!(card.selected_label(), None);
        assert!(card.view().rows.iter().all(|row| !row.selected));

        card.set_controlled_selection(None);
        assert_eq!(card.selected_label(), Some("Casa"));
    }

    #[test]
    fn test_rows() {
        let view = ManageAddressesCard::new(book()).view();
        assert_eq!(view.rows[0].line1, "Rua das Flores, 123 - Ap. 402, Bloco B");
        assert_eq!(view.rows[0].line2, "Centro - João Monlevade/MG - CEP 35930-000");
        assert_eq!(view.rows[1].line1, "Av. Paulista, 123");
        assert!(view.rows[0].selected);
        assert_eq!(view.selected_caption.as_deref(), Some("Endereço selecionado: Casa"));
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn test_empty_book() {
        let view = ManageAddressesCard::new(Vec::new()).view();
        assert_eq!(view.empty_message, Some("Nenhum endereço cadastrado ainda."));
        assert_eq!(view.selected_caption, None);
    }

    #[test]
    fn test_create_flow_validates_before_emitting() {
        let mut card = ManageAddressesCard::new(book());
        let mut sink = RecordingSink::new();

        card.open_create();
        assert_eq!(card.modal().unwrap().mode.title(), "Novo endereço");
        let errors = card.submit(&mut sink).unwrap_err();
        assert_eq!(errors.len(), AddressField::REQUIRED.len());
        assert!(card.modal().is_some());
        assert!(sink.events().is_empty());

        card.set_field(AddressField::Label, "Casa dos pais");
        card.set_field(AddressField::Street, "Rua dos Ipês");
        card.set_field(AddressField::ResidenceNumber, "45");
        card.set_field(AddressField::Neighborhood, "Jardins");
        let modal = card.modal_mut().unwrap();
        modal.select_state("MG");
        modal.select_city("Belo Horizonte");
        card.set_field(AddressField::ZipCode, "30123456");

        card.submit(&mut sink).unwrap();
        assert!(card.modal().is_none());
        let [SurfaceEvent::AddressCreated(form)] = sink.events() else {
            panic!("expected a single AddressCreated event");
        };
        assert_eq!(form.zip_code, "30123-456");
        assert_eq!(form.country, DEFAULT_COUNTRY);
    }

    #[test]
    fn test_changing_state_clears_city() {
        let mut card = ManageAddressesCard::new(book());
        card.open_edit(&"addr-1".into());
        let modal = card.modal_mut().unwrap();
        assert_eq!(modal.form.city, "João Monlevade");
        assert_eq!(modal.city_options().len(), 3);

        modal.select_state("SP");
        assert_eq!(modal.form.city, "");
        assert_eq!(modal.city_options()[0].value, "São Paulo");
    }

    #[test]
    fn test_edit_flow_emits_merged_address() {
        let mut card = ManageAddressesCard::new(book());
        let mut sink = RecordingSink::new();

        card.open_edit(&"addr-2".into());
        assert_eq!(card.modal().unwrap().mode.action_label(), "Salvar alterações");
        card.set_field(AddressField::ResidenceNumber, "1000");
        card.submit(&mut sink).unwrap();

        let [SurfaceEvent::AddressUpdated(updated)] = sink.events() else {
            panic!("expected a single AddressUpdated event");
        };
        assert_eq!(updated.id, AddressId::new("addr-2"));
        assert_eq!(updated.residence_number, "1000");
    }

    #[test]
    fn test_two_step_removal() {
        let mut card = ManageAddressesCard::new(book());
        let mut sink = RecordingSink::new();

        card.request_removal(&"addr-1".into());
        let prompt = card.removal_prompt().unwrap();
        assert_eq!(prompt.message, "Deseja remover o endereço \"Casa\"?");
        assert_eq!(prompt.description, "Rua das Flores, 123 - João Monlevade/MG");

        card.cancel_removal();
        card.confirm_removal(&mut sink);
        assert!(sink.events().is_empty());

        card.request_removal(&"addr-1".into());
        card.confirm_removal(&mut sink);
        assert_eq!(sink.events(), [SurfaceEvent::AddressRemoved("addr-1".into())]);
        assert!(card.removal_prompt().is_none());
    }

    #[test]
    fn test_set_addresses_drops_stale_state() {
        let mut card = ManageAddressesCard::new(book());
        let mut sink = RecordingSink::new();
        card.select(&"addr-2".into(), &mut sink);
        card.request_removal(&"addr-2".into());

        card.set_addresses(book().into_iter().take(1).collect());
        assert!(card.removal_prompt().is_none());
        assert_eq!(card.selected_label(), Some("Casa"));
    }
}
