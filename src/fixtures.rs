//! OVF descriptors shared by the unit tests.

/// One virtual system, two networks, every section kind present.
pub(crate) const SINGLE_VM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Envelope xmlns="http://schemas.dmtf.org/ovf/envelope/1"
          xmlns:ovf="http://schemas.dmtf.org/ovf/envelope/1"
          xmlns:vmw="http://www.vmware.com/schema/ovf"
          xmlns:rasd="http://schemas.dmtf.org/wbem/wscim/1/cim-schema/2/CIM_ResourceAllocationSettingData">
  <References>
    <File ovf:href="web-disk1.vmdk" ovf:id="file1" ovf:size="1024"/>
  </References>
  <NetworkSection>
    <Info>The list of logical networks</Info>
    <Network ovf:name="VM Network">
      <Description>The VM Network network</Description>
    </Network>
    <Network ovf:name="Backup Network"/>
  </NetworkSection>
  <VirtualSystem ovf:id="web01">
    <Info>A virtual machine</Info>
    <OperatingSystemSection ovf:id="94" vmw:osType="ubuntu64Guest">
      <Info>The kind of installed guest operating system</Info>
    </OperatingSystemSection>
    <VirtualHardwareSection>
      <Info>Virtual hardware requirements</Info>
      <Item>
        <rasd:ElementName>2 virtual CPU(s)</rasd:ElementName>
        <rasd:InstanceID>1</rasd:InstanceID>
        <rasd:ResourceType>3</rasd:ResourceType>
        <rasd:VirtualQuantity>2</rasd:VirtualQuantity>
      </Item>
      <Item>
        <rasd:ElementName>SCSI controller 0</rasd:ElementName>
        <rasd:InstanceID>3</rasd:InstanceID>
        <rasd:ResourceSubType>lsilogic</rasd:ResourceSubType>
        <rasd:ResourceType>6</rasd:ResourceType>
      </Item>
      <Item>
        <rasd:ElementName>Network adapter 1</rasd:ElementName>
        <rasd:InstanceID>7</rasd:InstanceID>
        <rasd:ResourceSubType>VmxNet3</rasd:ResourceSubType>
        <rasd:ResourceType>10</rasd:ResourceType>
      </Item>
      <Item>
        <rasd:ElementName>Mystery device</rasd:ElementName>
        <rasd:ResourceSubType>unknown</rasd:ResourceSubType>
      </Item>
    </VirtualHardwareSection>
    <ProductSection>
      <Info>Information about the installed software</Info>
      <Product>Web Appliance</Product>
    </ProductSection>
    <ProductSection ovf:class="vm">
      <Info>Network settings</Info>
      <Category>Networking</Category>
      <Property ovf:key="ip" ovf:type="string" ovf:userConfigurable="true">
        <Label>IP Address</Label>
        <Description>The IP address for this interface</Description>
      </Property>
      <Property ovf:key="broken" ovf:type="string">
        <Description>Has no label</Description>
      </Property>
      <Property ovf:key="hostname" ovf:type="string">
        <Label>  Hostname  </Label>
        <Description>   </Description>
      </Property>
      <Property ovf:type="string">
        <Label>Keyless</Label>
      </Property>
    </ProductSection>
    <vmw:vServiceDependencySection ovf:required="false" vmw:id="installation">
      <Info>A vService dependency</Info>
      <vmw:Type>vmware.vim.extension</vmw:Type>
      <vmw:Name>vCenter Extension Installation</vmw:Name>
    </vmw:vServiceDependencySection>
  </VirtualSystem>
</Envelope>
"#;

/// A vApp: the collection carries its own product section around two members.
pub(crate) const VAPP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Envelope xmlns="http://schemas.dmtf.org/ovf/envelope/1"
          xmlns:ovf="http://schemas.dmtf.org/ovf/envelope/1"
          xmlns:vmw="http://www.vmware.com/schema/ovf">
  <NetworkSection>
    <Network ovf:name="Frontend"/>
  </NetworkSection>
  <VirtualSystemCollection ovf:id="stack">
    <Info>A collection of virtual machines</Info>
    <ProductSection ovf:class="vapp" ovf:instance="1">
      <Category>Application</Category>
      <Property ovf:key="dns">
        <Label>DNS server</Label>
      </Property>
    </ProductSection>
    <VirtualSystem ovf:id="db">
      <ProductSection ovf:class="db">
        <Category>Database</Category>
        <Property ovf:key="port">
          <Label>Port</Label>
        </Property>
      </ProductSection>
    </VirtualSystem>
    <VirtualSystem ovf:id="app"/>
  </VirtualSystemCollection>
</Envelope>
"#;

/// Two standalone virtual systems, the second nested below an unrelated node.
pub(crate) const TWO_VMS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ovf:Envelope xmlns:ovf="http://schemas.dmtf.org/ovf/envelope/1"
              xmlns:vmw="http://www.vmware.com/schema/ovf">
  <ovf:VirtualSystem ovf:id="first">
    <ovf:ProductSection ovf:instance="0">
      <ovf:Category>Identity</ovf:Category>
      <ovf:Property ovf:key="name">
        <ovf:Label>Name</ovf:Label>
      </ovf:Property>
    </ovf:ProductSection>
    <vmw:vServiceDependencySection vmw:id="first-svc"/>
  </ovf:VirtualSystem>
  <ovf:Wrapper>
    <ovf:VirtualSystem ovf:id="second">
      <ovf:ProductSection>
        <ovf:Category>Identity</ovf:Category>
        <ovf:Property ovf:key="name">
          <ovf:Label>Name</ovf:Label>
        </ovf:Property>
      </ovf:ProductSection>
      <vmw:vServiceDependencySection/>
    </ovf:VirtualSystem>
  </ovf:Wrapper>
</ovf:Envelope>
"#;

/// No network section and no properties at all.
pub(crate) const BARE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Envelope xmlns="http://schemas.dmtf.org/ovf/envelope/1"
          xmlns:ovf="http://schemas.dmtf.org/ovf/envelope/1">
  <VirtualSystem ovf:id="bare"/>
</Envelope>
"#;
