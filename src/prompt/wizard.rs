use std::path::PathBuf;

/// A question the current wizard step asks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Text {
        label: String,
        default: Option<String>,
    },
    YesNo {
        label: String,
        default: bool,
    },
}

/// Input fed to a wizard step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    YesNo(bool),
    Cancel,
}

/// A linear sequence of questions ending in a result or an abort
pub trait Wizard: Sized {
    type Output;

    /// Question for the current step, `None` once finished or aborted
    fn prompt(&self) -> Option<Prompt>;

    /// Validation message left by the last answer
    fn error(&self) -> Option<&str>;

    /// Feed an answer to the current step
    fn advance(self, answer: Answer) -> Self;

    /// Collected result, `None` when the wizard was aborted or is unfinished
    fn finish(self) -> Option<Self::Output>;
}

/// Interpret an answer to a yes/no question; empty text takes the default
fn yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

// ============================================================================
// New post
// ============================================================================

/// Fields collected for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostStep {
    Title,
    Description { title: String },
    Visibility { title: String, description: String },
    Done(PostDraft),
    Aborted,
}

/// Title → description → visibility
#[derive(Debug, Clone)]
pub struct PostWizard {
    step: PostStep,
    default_public: bool,
    error: Option<String>,
}

impl PostWizard {
    pub fn new(default_public: bool) -> Self {
        Self {
            step: PostStep::Title,
            default_public,
            error: None,
        }
    }

    #[cfg(test)]
    pub fn step(&self) -> &PostStep {
        &self.step
    }

    fn goto(self, step: PostStep) -> Self {
        Self {
            step,
            error: None,
            ..self
        }
    }

    fn reject(self, message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..self
        }
    }
}

impl Wizard for PostWizard {
    type Output = PostDraft;

    fn prompt(&self) -> Option<Prompt> {
        match &self.step {
            PostStep::Title => Some(Prompt::Text {
                label: "What's the title of your post?".to_string(),
                default: None,
            }),
            PostStep::Description { .. } => Some(Prompt::Text {
                label: "Post description (optional)".to_string(),
                default: None,
            }),
            PostStep::Visibility { .. } => Some(Prompt::YesNo {
                label: "Should this post be public?".to_string(),
                default: self.default_public,
            }),
            PostStep::Done(_) | PostStep::Aborted => None,
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn advance(self, answer: Answer) -> Self {
        if answer == Answer::Cancel {
            return self.goto(PostStep::Aborted);
        }

        match (self.step.clone(), answer) {
            (PostStep::Title, Answer::Text(title)) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    self.reject("title cannot be empty")
                } else {
                    self.goto(PostStep::Description { title })
                }
            }
            (PostStep::Description { title }, Answer::Text(description)) => {
                let description = description.trim().to_string();
                self.goto(PostStep::Visibility { title, description })
            }
            (PostStep::Visibility { title, description }, answer) => {
                let public = match answer {
                    Answer::YesNo(public) => Some(public),
                    Answer::Text(text) => yes_no(&text, self.default_public),
                    Answer::Cancel => None,
                };
                match public {
                    Some(public) => self.goto(PostStep::Done(PostDraft {
                        title,
                        description,
                        public,
                    })),
                    None => self.reject("please answer y or n"),
                }
            }
            (_, _) => self,
        }
    }

    fn finish(self) -> Option<PostDraft> {
        match self.step {
            PostStep::Done(draft) => Some(draft),
            _ => None,
        }
    }
}

// ============================================================================
// Blog initialization
// ============================================================================

/// Answers collected by the init wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPlan {
    pub name: String,
    pub path: PathBuf,
    pub create_repo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitStep {
    Name,
    Location { name: String },
    CreateRepo { name: String, path: PathBuf },
    Done(InitPlan),
    Aborted,
}

/// Blog name → location → create the GitHub repository?
#[derive(Debug, Clone)]
pub struct InitWizard {
    step: InitStep,
    default_name: String,
    home: PathBuf,
    error: Option<String>,
}

impl InitWizard {
    pub fn new(default_name: &str, home: impl Into<PathBuf>) -> Self {
        Self {
            step: InitStep::Name,
            default_name: default_name.to_string(),
            home: home.into(),
            error: None,
        }
    }

    #[cfg(test)]
    pub fn step(&self) -> &InitStep {
        &self.step
    }

    fn goto(self, step: InitStep) -> Self {
        Self {
            step,
            error: None,
            ..self
        }
    }
}

impl Wizard for InitWizard {
    type Output = InitPlan;

    fn prompt(&self) -> Option<Prompt> {
        match &self.step {
            InitStep::Name => Some(Prompt::Text {
                label: "What should your blog be called?".to_string(),
                default: Some(self.default_name.clone()),
            }),
            InitStep::Location { name } => Some(Prompt::Text {
                label: "Where should your blog be created?".to_string(),
                default: Some(self.home.join(name).display().to_string()),
            }),
            InitStep::CreateRepo { .. } => Some(Prompt::YesNo {
                label: "Create GitHub repository?".to_string(),
                default: true,
            }),
            InitStep::Done(_) | InitStep::Aborted => None,
        }
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn advance(self, answer: Answer) -> Self {
        if answer == Answer::Cancel {
            return self.goto(InitStep::Aborted);
        }

        match (self.step.clone(), answer) {
            (InitStep::Name, Answer::Text(name)) => {
                let name = match name.trim() {
                    "" => self.default_name.clone(),
                    name => name.to_string(),
                };
                self.goto(InitStep::Location { name })
            }
            (InitStep::Location { name }, Answer::Text(path)) => {
                let path = match path.trim() {
                    "" => self.home.join(&name),
                    path => PathBuf::from(path),
                };
                self.goto(InitStep::CreateRepo { name, path })
            }
            (InitStep::CreateRepo { name, path }, answer) => {
                let create_repo = match answer {
                    Answer::YesNo(yes) => Some(yes),
                    Answer::Text(text) => yes_no(&text, true),
                    Answer::Cancel => None,
                };
                match create_repo {
                    Some(create_repo) => self.goto(InitStep::Done(InitPlan {
                        name,
                        path,
                        create_repo,
                    })),
                    None => Self {
                        error: Some("please answer y or n".to_string()),
                        ..self
                    },
                }
            }
            (_, _) => self,
        }
    }

    fn finish(self) -> Option<InitPlan> {
        match self.step {
            InitStep::Done(plan) => Some(plan),
            _ => None,
        }
    }
}
