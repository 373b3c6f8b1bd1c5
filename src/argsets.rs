pub struct ReportArgs {
    pub filter: Option<String>,
}
