use crate::page::Region;

const PANEL_LEGEND: &str = "Internal AI generated summary of comments";
const LOADING_TEXT: &str = "Loading summary…";

const PANEL_STYLE: &str = r#"<style>
.loader {
  width: 50px;
  aspect-ratio: 1;
  display: grid;
  border: 4px solid #0000;
  border-radius: 50%;
  border-right-color: #020089;
  animation: l15 1s infinite linear;
  margin-left: 20%;
}
.loader::before,
.loader::after {
  content: "";
  grid-area: 1/1;
  margin: 2px;
  border: inherit;
  border-radius: 50%;
  animation: l15 2s infinite;
}
.loader::after {
  margin: 8px;
  animation-duration: 3s;
}
@keyframes l15 {
  100% { transform: rotate(1turn) }
}
#ai-summary-box {
  display: flex;
  align-items: center;
}
.loader-text {
  font-family: Tahoma, Arial;
  font-size: 1.2em;
  color: #333333;
  text-align: center;
  margin-top: 10%;
}
</style>"#;

/// Markup for the summary panel placed above the comment history.
pub fn summary_panel_html() -> String {
    format!(
        r#"<div style="position: relative;">
{style}
<fieldset class="mnu_box_page">
  <legend>{legend}</legend>
  <div class="cssform">
    <div id="{summary_id}">
      <div class="loader-container">
        <div class="loader"></div>
        <div class="loader-text">{loading}</div>
      </div>
    </div>
    <div id="{key_points_id}"></div>
  </div>
</fieldset>
</div>"#,
        style = PANEL_STYLE,
        legend = PANEL_LEGEND,
        summary_id = Region::SummaryBox.element_id(),
        key_points_id = Region::KeyPoints.element_id(),
        loading = LOADING_TEXT,
    )
}
