//! Embedded default templates.
//!
//! One resource per [`TemplateKind`], compiled into the binary so the tool
//! works without any template directory. The `DirStore` adapter can shadow
//! these with user-provided `<name>.tmpl` files.
//!
//! Placeholders recognized by the renderer: `${namespace}`, `${classname}`,
//! `${namespaces}` (the using block) and `${cursor}`.

use sharpgen_core::domain::TemplateKind;

const CLASS: &str = r"${namespaces}namespace ${namespace}
{
    public class ${classname}
    {
        ${cursor}
    }
}
";

const INTERFACE: &str = r"${namespaces}namespace ${namespace}
{
    public interface ${classname}
    {
        ${cursor}
    }
}
";

const ENUM: &str = r"${namespaces}namespace ${namespace}
{
    public enum ${classname}
    {
        ${cursor}
    }
}
";

const STRUCT: &str = r"${namespaces}namespace ${namespace}
{
    public struct ${classname}
    {
        ${cursor}
    }
}
";

const RECORD: &str = r"${namespaces}namespace ${namespace}
{
    public record ${classname}
    {
        ${cursor}
    }
}
";

const CONTROLLER: &str = r"${namespaces}namespace ${namespace}
{
    public class ${classname} : Controller
    {
        private readonly ILogger<${classname}> _logger;

        public ${classname}(ILogger<${classname}> logger)
        {
            _logger = logger;
        }

        public IActionResult Index()
        {
            return View();${cursor}
        }
    }
}
";

const API_CONTROLLER: &str = r#"${namespaces}namespace ${namespace}
{
    [Route("api/[controller]")]
    [ApiController]
    public class ${classname} : ControllerBase
    {
        ${cursor}
    }
}
"#;

const MSTEST: &str = r"${namespaces}namespace ${namespace}
{
    [TestClass]
    public class ${classname}
    {
        [TestMethod]
        public void TestMethod1()
        {
            ${cursor}
        }
    }
}
";

const NUNIT: &str = r"${namespaces}namespace ${namespace}
{
    [TestFixture]
    public class ${classname}
    {
        [SetUp]
        public void Setup()
        {
        }

        [Test]
        public void Test1()
        {
            ${cursor}
        }
    }
}
";

const XUNIT: &str = r"${namespaces}namespace ${namespace}
{
    public class ${classname}
    {
        [Fact]
        public void Test1()
        {
            ${cursor}
        }
    }
}
";

const RAZOR_PAGE_CLASS: &str = r"${namespaces}namespace ${namespace}
{
    public class ${classname}Model : PageModel
    {
        private readonly ILogger<${classname}Model> _logger;

        public ${classname}Model(ILogger<${classname}Model> logger)
        {
            _logger = logger;
        }

        public void OnGet()
        {
            ${cursor}
        }
    }
}
";

const RAZOR_PAGE_TEMPLATE: &str = r"@page
@model ${namespace}.${classname}Model
@{
}
${cursor}
";

const UWP_PAGE_CLASS: &str = r"${namespaces}namespace ${namespace}
{
    /// <summary>
    /// An empty page that can be used on its own or navigated to within a Frame.
    /// </summary>
    public sealed partial class ${classname} : Page
    {
        public ${classname}()
        {
            this.InitializeComponent();${cursor}
        }
    }
}
";

const UWP_PAGE_XML: &str = r#"<Page
    x:Class="${namespace}.${classname}"
    xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
    xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
    xmlns:local="using:${namespace}"
    xmlns:d="http://schemas.microsoft.com/expression/blend/2008"
    xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"
    mc:Ignorable="d">

    <Grid Background="{ThemeResource ApplicationPageBackgroundThemeBrush}">

    </Grid>
</Page>
"#;

const UWP_USERCONTROL_CLASS: &str = r"${namespaces}namespace ${namespace}
{
    public sealed partial class ${classname} : UserControl
    {
        public ${classname}()
        {
            this.InitializeComponent();${cursor}
        }
    }
}
";

const UWP_USERCONTROL_XML: &str = r#"<UserControl
    x:Class="${namespace}.${classname}"
    xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
    xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
    xmlns:local="using:${namespace}"
    xmlns:d="http://schemas.microsoft.com/expression/blend/2008"
    xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"
    mc:Ignorable="d"
    d:DesignHeight="300"
    d:DesignWidth="400">

    <Grid>

    </Grid>
</UserControl>
"#;

const UWP_WINDOW_CLASS: &str = r"${namespaces}namespace ${namespace}
{
    public sealed partial class ${classname} : Window
    {
        public ${classname}()
        {
            this.InitializeComponent();${cursor}
        }
    }
}
";

const UWP_WINDOW_XML: &str = r#"<Window
    x:Class="${namespace}.${classname}"
    xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
    xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
    xmlns:local="using:${namespace}"
    xmlns:d="http://schemas.microsoft.com/expression/blend/2008"
    xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"
    mc:Ignorable="d"
    Title="${classname}">

    <Grid>

    </Grid>
</Window>
"#;

const UWP_RESOURCE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <resheader name="version">
    <value>2.0</value>
  </resheader>
  <resheader name="reader">
    <value>System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
  </resheader>
  <resheader name="writer">
    <value>System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
  </resheader>
</root>
"#;

/// Raw template text for a kind.
pub const fn content(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Class => CLASS,
        TemplateKind::Interface => INTERFACE,
        TemplateKind::Enum => ENUM,
        TemplateKind::Struct => STRUCT,
        TemplateKind::Record => RECORD,
        TemplateKind::Controller => CONTROLLER,
        TemplateKind::ApiController => API_CONTROLLER,
        TemplateKind::MsTest => MSTEST,
        TemplateKind::NUnit => NUNIT,
        TemplateKind::XUnit => XUNIT,
        TemplateKind::RazorPageClass => RAZOR_PAGE_CLASS,
        TemplateKind::RazorPageTemplate => RAZOR_PAGE_TEMPLATE,
        TemplateKind::UwpPageClass => UWP_PAGE_CLASS,
        TemplateKind::UwpPageXml => UWP_PAGE_XML,
        TemplateKind::UwpUserControlClass => UWP_USERCONTROL_CLASS,
        TemplateKind::UwpUserControlXml => UWP_USERCONTROL_XML,
        TemplateKind::UwpWindowClass => UWP_WINDOW_CLASS,
        TemplateKind::UwpWindowXml => UWP_WINDOW_XML,
        TemplateKind::UwpResource => UWP_RESOURCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_content() {
        for kind in TemplateKind::ALL {
            assert!(!content(kind).is_empty(), "{kind} has empty content");
        }
    }

    #[test]
    fn source_templates_carry_the_core_placeholders() {
        for kind in TemplateKind::ALL.into_iter().filter(|k| k.is_source()) {
            let text = content(kind);
            assert!(text.contains("${namespace}"), "{kind} misses namespace");
            assert!(text.contains("${classname}"), "{kind} misses classname");
            assert!(text.contains("${namespaces}"), "{kind} misses using block");
        }
    }

    #[test]
    fn resource_template_has_no_placeholders() {
        assert!(!content(TemplateKind::UwpResource).contains("${"));
    }
}
