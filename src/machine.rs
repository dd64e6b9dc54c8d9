use tracing::debug;

use crate::{
    errors::EnigmaError,
    plugboard::Plugboard,
    reflector::Reflector,
    rotor::Rotor,
    types::{Letter, MachineSettings, RotorSetting, RotorSpec, Settings, ROTOR_COUNT},
};

// Rotor slots, in the order they appear in settings.
const LEFT: usize = 0; // slowest
const MIDDLE: usize = 1;
const RIGHT: usize = 2; // fastest, steps on every letter

/// The assembled cipher machine: three rotors, a reflector, and a
/// plugboard, plus the stepping algorithm that ties them together.
///
/// A machine is either fully configured or fully unconfigured; a failed
/// [`apply_settings`](Self::apply_settings) call never leaves a partial
/// configuration behind.
///
/// All operations are synchronous and `&mut self`; the intended model is
/// one owned machine per session. A machine shared across threads needs
/// an external lock around the whole configure/encrypt sequence, since
/// interleaved stepping from two callers corrupts both cipher streams.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    configured: Option<Configured>,
}

#[derive(Debug, Clone)]
struct Configured {
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// A new, unconfigured machine.
    #[must_use]
    pub const fn new() -> Self {
        Self { configured: None }
    }

    /// Validate and commit a full configuration.
    ///
    /// Every component is validated before any machine state changes: a
    /// complete candidate configuration is built first and committed with
    /// a single assignment. On failure the previous configuration (or
    /// unconfigured state) is left exactly as it was.
    ///
    /// Unset rotor positions and ring settings default to 0.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::InvalidRotorCount` unless exactly three
    /// rotors are supplied, or the first validation error from the rotor,
    /// reflector, or plugboard components.
    pub fn apply_settings(&mut self, settings: &MachineSettings) -> Result<Settings, EnigmaError> {
        if settings.rotors.len() != ROTOR_COUNT {
            return Err(EnigmaError::InvalidRotorCount {
                got: settings.rotors.len(),
            });
        }

        let rotors = [
            build_rotor(&settings.rotors[LEFT])?,
            build_rotor(&settings.rotors[MIDDLE])?,
            build_rotor(&settings.rotors[RIGHT])?,
        ];
        let reflector = Reflector::create(&settings.reflector)?;
        let plugboard = Plugboard::from_pairs(&settings.plugboard)?;

        let configured = Configured {
            rotors,
            reflector,
            plugboard,
        };
        let snapshot = configured.snapshot();
        self.configured = Some(configured);
        debug!(
            reflector = snapshot.reflector.as_str(),
            plugboard_pairs = snapshot.plugboard.len(),
            "settings committed"
        );
        Ok(snapshot)
    }

    /// Return the machine to the unconfigured state.
    pub fn reset(&mut self) {
        self.configured = None;
        debug!("machine reset");
    }

    /// Current configuration snapshot with live rotor positions, or
    /// `None` when unconfigured.
    #[must_use]
    pub fn settings(&self) -> Option<Settings> {
        self.configured.as_ref().map(Configured::snapshot)
    }

    /// Encipher a single letter: advance the rotors, then run the full
    /// signal path.
    ///
    /// The path is reciprocal: from the same pre-step rotor state,
    /// enciphering the output yields the input again. Because stepping
    /// advances state as a side effect, decrypting a whole message means
    /// re-applying the original settings first, not running a second pass
    /// over already-advanced rotors.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::MachineNotConfigured` when no settings have
    /// been applied.
    pub fn encode_letter(&mut self, c: Letter) -> Result<Letter, EnigmaError> {
        let configured = self
            .configured
            .as_mut()
            .ok_or(EnigmaError::MachineNotConfigured)?;
        Ok(configured.encode(c))
    }

    /// Encipher a message. ASCII letters are folded to uppercase and
    /// enciphered; every other character (spaces, punctuation, digits) is
    /// echoed verbatim without consuming a rotor step.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaError::MachineNotConfigured` when no settings have
    /// been applied.
    pub fn encrypt_message(&mut self, text: &str) -> Result<String, EnigmaError> {
        let configured = self
            .configured
            .as_mut()
            .ok_or(EnigmaError::MachineNotConfigured)?;

        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match Letter::from_char(ch) {
                Some(letter) => out.push(configured.encode(letter).to_char()),
                None => out.push(ch),
            }
        }
        debug!(chars = out.chars().count(), "message enciphered");
        Ok(out)
    }
}

fn build_rotor(spec: &RotorSpec) -> Result<Rotor, EnigmaError> {
    Rotor::create(
        &spec.name,
        spec.position.unwrap_or(0),
        spec.ring_setting.unwrap_or(0),
    )
}

impl Configured {
    /// Advance the rotor stack by one tick.
    ///
    /// Notch state is sampled before any rotor moves, and all three
    /// conditional steps are applied from that pre-step snapshot. The
    /// middle rotor steps when the right rotor was at its notch *or* when
    /// it was at its own notch - the latter is the double-stepping
    /// anomaly, where the middle rotor advances together with the left
    /// rotor on the same tick. A step-then-check rendition produces a
    /// different, historically wrong cycle.
    fn advance(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].is_at_notch();
        let right_at_notch = self.rotors[RIGHT].is_at_notch();

        self.rotors[RIGHT].step();
        if right_at_notch || middle_at_notch {
            self.rotors[MIDDLE].step();
        }
        if middle_at_notch {
            self.rotors[LEFT].step();
        }
    }

    /// One letter through the full signal path: plugboard, rotors right
    /// to left, reflector, rotors left to right, plugboard.
    fn encode(&mut self, c: Letter) -> Letter {
        self.advance();

        let mut x = self.plugboard.swap(c);
        x = self.rotors[RIGHT].encode_forward(x);
        x = self.rotors[MIDDLE].encode_forward(x);
        x = self.rotors[LEFT].encode_forward(x);
        x = self.reflector.reflect(x);
        x = self.rotors[LEFT].encode_backward(x);
        x = self.rotors[MIDDLE].encode_backward(x);
        x = self.rotors[RIGHT].encode_backward(x);
        self.plugboard.swap(x)
    }

    fn snapshot(&self) -> Settings {
        Settings {
            rotors: self.rotors.each_ref().map(|r| RotorSetting {
                name: r.name().to_owned(),
                position: r.position(),
                ring_setting: r.ring_setting(),
            }),
            reflector: self.reflector.name().to_owned(),
            plugboard: self.plugboard.pairs(),
        }
    }
}
