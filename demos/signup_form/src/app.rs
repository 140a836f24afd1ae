use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;
use valtext_core::{ImageRef, Rect, Scene};
use valtext_ui::{FormAggregator, PresentationConfig, SubmitButton, ValidationField};

use crate::host::LogHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Password,
    PasswordConfirm,
}

const FIELD_HEIGHT: f32 = 56.0;
const FIELD_GAP: f32 = 28.0;
const WIDTH: f32 = 320.0;

pub struct SignupScreen {
    pub name: ValidationField,
    pub email: ValidationField,
    pub password: ValidationField,
    pub password_confirm: ValidationField,
    pub form: FormAggregator<SignupField>,
}

impl SignupScreen {
    /// Four fields styled from `theme`, with the sign-up rules installed.
    pub fn new(theme: &PresentationConfig) -> Self {
        let mut name = ValidationField::new(
            theme
                .clone()
                .title("Name")
                .placeholder("Name")
                .error_message("More than 5 characters")
                .success_icon(ImageRef::named("success"))
                .error_icon(ImageRef::named("error")),
        );
        let mut email = ValidationField::new(
            theme
                .clone()
                .title("Email")
                .placeholder("Email")
                .error_message("Enter an email address")
                .left_icon(ImageRef::named("mail"))
                .success_icon(ImageRef::named("success"))
                .error_icon(ImageRef::named("error")),
        );
        let mut password = ValidationField::new(
            theme
                .clone()
                .title("Password")
                .placeholder("Password")
                .error_message("More than 8 characters")
                .secure_entry(true)
                .success_icon(ImageRef::named("thumb_up"))
                .error_icon(ImageRef::named("thumb_down")),
        );
        let mut password_confirm = ValidationField::new(
            theme
                .clone()
                .title("Confirm password")
                .placeholder("Confirm password")
                .error_message("Passwords do not match")
                .secure_entry(true)
                .success_icon(ImageRef::named("thumb_up"))
                .error_icon(ImageRef::named("thumb_down")),
        );

        name.set_valid_condition(|t| t.graphemes(true).count() > 5);
        email.set_valid_condition(|t| t.graphemes(true).count() > 5 && t.contains('@'));
        password.set_valid_condition(|t| t.graphemes(true).count() > 8);
        // Checked against the password as it is when the confirmation is edited.
        let pw = password.text_signal();
        password_confirm.set_valid_condition(move |t| pw.with(|p| p == t));

        let host = Rc::new(LogHost);
        for (i, f) in [&mut name, &mut email, &mut password, &mut password_confirm]
            .into_iter()
            .enumerate()
        {
            f.set_host(host.clone());
            f.set_bounds(Rect::new(
                16.0,
                16.0 + i as f32 * (FIELD_HEIGHT + FIELD_GAP),
                WIDTH,
                FIELD_HEIGHT,
            ));
        }

        let form = FormAggregator::new(SubmitButton::new("Confirm"));
        form.register(SignupField::Name, &name);
        form.register(SignupField::Email, &email);
        form.register(SignupField::Password, &password);
        form.register(SignupField::PasswordConfirm, &password_confirm);
        form.on_all_valid_changed(|v| {
            log::info!("confirm button {}", if v { "enabled" } else { "disabled" });
        });

        Self {
            name,
            email,
            password,
            password_confirm,
            form,
        }
    }

    pub fn field_mut(&mut self, which: SignupField) -> &mut ValidationField {
        match which {
            SignupField::Name => &mut self.name,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
            SignupField::PasswordConfirm => &mut self.password_confirm,
        }
    }

    /// Focus `which`, type `text` one grapheme at a time, then blur.
    pub fn type_into(&mut self, which: SignupField, text: &str) {
        let field = self.field_mut(which);
        field.focus();
        field.select_all();
        field.delete_backward();
        for ch in text.chars() {
            let mut buf = [0u8; 4];
            field.insert_text(ch.encode_utf8(&mut buf));
        }
        field.blur();
        log::info!(
            "{which:?} = {:?} -> {:?}",
            field.display_text(),
            field.validity()
        );
    }

    pub fn tick(&mut self) -> bool {
        let mut moving = false;
        for f in [
            &mut self.name,
            &mut self.email,
            &mut self.password,
            &mut self.password_confirm,
        ] {
            moving |= f.tick();
        }
        moving
    }

    pub fn paint(&self) -> Scene {
        let mut scene = Scene::new();
        for f in [&self.name, &self.email, &self.password, &self.password_confirm] {
            f.paint(&mut scene);
        }
        let top = 16.0 + 4.0 * (FIELD_HEIGHT + FIELD_GAP);
        self.form
            .submit_button()
            .paint(Rect::new(16.0, top, WIDTH, 44.0), &mut scene);
        scene
    }
}
