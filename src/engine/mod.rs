//! engine
//!
//! Runs one questionnaire session: Ask → Derive → Present.
//!
//! # Lifecycle
//!
//! 1. **Ask** - collect the adaptation and commercial-use answers
//! 2. **Derive** - map the answers to a license (pure, see [`crate::core::license`])
//! 3. **Present** - show the banner, then optionally build an attribution line
//!
//! Steps run strictly in order and none is skipped except the attribution
//! sub-step. Answers are passed along as values and the finished run is
//! returned as a [`Session`].
//!
//! # Cancellation
//!
//! End of input during any prompt aborts the run with
//! [`PromptError::Cancelled`]. Nothing is printed for it here; the caller
//! owns the farewell.

use std::io::{BufRead, Write};

use crate::core::license::{derive_license, LicenseResult};
use crate::core::types::{AdaptationChoice, AttributionRequest, CommercialChoice, Confirmation};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{Console, PromptError};

pub const INTRO: &str = "--- Creative Commons Lisans Seçme Aracı ---\n\
     Eseriniz için en uygun Creative Commons lisansını bulmak için\n\
     lütfen aşağıdaki soruları yanıtlayın.";

pub const ADAPTATION_QUESTION: &str =
    "1. Eserinizin uyarlanmasına (remix, dönüştürme, üzerine inşa etme) izin veriyor musunuz?";

pub const COMMERCIAL_QUESTION: &str = "2. Eserinizin ticari kullanımına izin veriyor musunuz?";

pub const ATTRIBUTION_OFFER: &str =
    "Lisansınız için önerilen atıf metnini oluşturmak ister misiniz?";

pub const ATTRIBUTION_QUESTION: &str = "Devam edilsin mi?";

pub const WORK_TITLE_LABEL: &str = "Eserinizin Adı: ";

pub const AUTHOR_NAME_LABEL: &str = "Sizin Adınız (veya Varlık Adı): ";

pub const COMPLETED: &str = "\nİşlem tamamlandı. Programdan çıkılıyor.";

/// Printed when the user interrupts the run.
pub const FAREWELL: &str = "\n\nProgram kullanıcı tarafından sonlandırıldı.";

/// Execution context for a session.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Emit `[debug]` diagnostics on stderr.
    pub debug: bool,
}

impl Context {
    /// Verbosity implied by this context.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.debug)
    }
}

/// The two questionnaire answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub adaptation: AdaptationChoice,
    pub commercial: CommercialChoice,
}

/// Everything a completed session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub answers: Answers,
    pub license: LicenseResult,
    /// Present only if the user asked for attribution text.
    pub attribution: Option<AttributionRequest>,
}

/// Ask both questions, in fixed order.
pub fn collect_answers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answers, PromptError> {
    let adaptation = console.choose::<AdaptationChoice>(ADAPTATION_QUESTION)?;
    let commercial = console.choose::<CommercialChoice>(COMMERCIAL_QUESTION)?;
    Ok(Answers {
        adaptation,
        commercial,
    })
}

/// Show the license banner, then offer the attribution text.
///
/// Returns the attribution details if the user accepted.
pub fn present<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    license: &LicenseResult,
) -> Result<Option<AttributionRequest>, PromptError> {
    console.say(output::format_banner(license))?;

    console.say(ATTRIBUTION_OFFER)?;
    let confirmation = console.choose::<Confirmation>(ATTRIBUTION_QUESTION)?;
    if !confirmation.is_yes() {
        return Ok(None);
    }

    let work_title = console.line(WORK_TITLE_LABEL)?;
    let author_name = console.line(AUTHOR_NAME_LABEL)?;
    let request = AttributionRequest::new(work_title, author_name);

    console.say(output::format_attribution(&license.attribution(&request)))?;
    Ok(Some(request))
}

/// Run a full session against the given console.
pub fn run<R: BufRead, W: Write>(
    ctx: &Context,
    console: &mut Console<R, W>,
) -> Result<Session, PromptError> {
    let verbosity = ctx.verbosity();

    console.say(INTRO)?;

    let answers = collect_answers(console)?;
    output::debug(format!("answers: {:?}", answers), verbosity);

    let license = derive_license(answers.adaptation, answers.commercial);
    output::debug(format!("derived {} ({})", license.code, license.url), verbosity);

    let attribution = present(console, &license)?;
    output::debug(
        format!("attribution requested: {}", attribution.is_some()),
        verbosity,
    );

    console.say(COMPLETED)?;

    Ok(Session {
        answers,
        license,
        attribution,
    })
}
