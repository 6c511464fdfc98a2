use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "jobtrail")]
#[command(
    author,
    version,
    about = "Track job applications and tailor resumes from the command line"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a jobtrail project in the current directory
    Init {
        /// Directory for the job document
        #[arg(long, default_value = ".jobtrail")]
        path: String,
    },

    /// Add a job application to the board
    #[command(visible_alias = "a")]
    Add {
        /// Company name
        company: String,

        /// Role or position title
        role: String,

        /// Starting column
        #[arg(short, long, value_enum, default_value = "saved")]
        status: JobStatusArg,

        /// Application date (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Salary or salary range
        #[arg(long)]
        salary: Option<String>,

        /// Link to the job posting
        #[arg(long)]
        link: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tracked applications
    #[command(visible_alias = "ls")]
    List {
        /// Filter by column
        #[arg(short, long, value_enum)]
        status: Option<JobStatusArg>,

        /// Only applications still in play (not rejected)
        #[arg(long)]
        active: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one application in full
    Show {
        /// Application id (or unique prefix)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an application's fields
    Update {
        /// Application id (or unique prefix)
        id: String,

        /// New company name
        #[arg(long)]
        company: Option<String>,

        /// New role
        #[arg(long)]
        role: Option<String>,

        /// New column
        #[arg(short, long, value_enum)]
        status: Option<JobStatusArg>,

        /// New application date
        #[arg(long)]
        date: Option<String>,

        /// New salary (empty string clears)
        #[arg(long)]
        salary: Option<String>,

        /// New posting link (empty string clears)
        #[arg(long)]
        link: Option<String>,

        /// New notes (empty string clears)
        #[arg(long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move an application to another column
    #[command(visible_alias = "mv")]
    Move {
        /// Application id (or unique prefix)
        id: String,

        /// Target column
        #[arg(value_enum)]
        status: JobStatusArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an application permanently
    Delete {
        /// Application id (or unique prefix)
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the board, one column per status
    Board,

    /// Export the job document as JSON
    Export {
        /// Output file (stdout if omitted)
        path: Option<String>,
    },

    /// Replace the job list with a previously exported document
    Import {
        /// File to import
        path: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Work with resumes in the remote store
    Resume {
        #[command(subcommand)]
        action: ResumeAction,
    },

    /// Start the document-extraction HTTP service
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
pub enum ResumeAction {
    /// List stored resumes
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a resume text file and extract its work experiences
    Upload {
        /// Resume title
        title: String,

        /// Path to a plain-text resume
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a resume's extracted work experiences
    Show {
        /// Resume id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Overwrite the description of one work experience
    Edit {
        /// Experience id
        id: String,

        /// New description (use '-' to read from stdin)
        description: String,
    },

    /// Restore an experience's description to its original text
    Reset {
        /// Resume id owning the experience
        resume: String,

        /// Experience id
        id: String,
    },

    /// Rewrite an experience description for a specific job posting
    Customize {
        /// Resume id owning the experience
        resume: String,

        /// Experience id
        id: String,

        /// File holding the target job description
        job_file: String,

        /// Title of the target job
        #[arg(long)]
        job_title: String,

        /// Save the rewritten description instead of printing it
        #[arg(long)]
        apply: bool,
    },

    /// Delete a resume and its experiences
    Delete {
        /// Resume id
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum JobStatusArg {
    Saved,
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl From<JobStatusArg> for crate::model::JobStatus {
    fn from(arg: JobStatusArg) -> Self {
        match arg {
            JobStatusArg::Saved => crate::model::JobStatus::Saved,
            JobStatusArg::Applied => crate::model::JobStatus::Applied,
            JobStatusArg::Interviewing => crate::model::JobStatus::Interviewing,
            JobStatusArg::Offer => crate::model::JobStatus::Offer,
            JobStatusArg::Rejected => crate::model::JobStatus::Rejected,
        }
    }
}
